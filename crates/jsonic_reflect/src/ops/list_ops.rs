use crate::Reflect;

/// An ordered sequence of reflected elements.
///
/// The serializer turns every `List` into a JSON array, keeping element
/// order.
///
/// ```
/// use jsonic_reflect::ops::List;
///
/// let scores = vec![7_i32, 9, 4];
/// let list: &dyn List = &scores;
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1).and_then(|v| v.downcast_ref::<i32>()), Some(&9));
/// assert!(list.get(3).is_none());
/// assert_eq!(list.iter().count(), 3);
/// ```
pub trait List: Reflect {
    /// The element at `index`, `None` past the end.
    fn get(&self, index: usize) -> Option<&dyn Reflect>;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl dyn List {
    /// Iterate the elements front to back.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Reflect> + '_ {
        (0..self.len()).filter_map(move |index| self.get(index))
    }
}
