use alloc::boxed::Box;

use crate::Reflect;

/// A trait used to power string-keyed [map-like] operations via reflection.
///
/// Maps serialize to plain JSON objects; they never carry a type tag.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use jsonic_reflect::ops::Map;
///
/// let mut scores = BTreeMap::new();
/// scores.insert("alice".to_owned(), 3_u32);
///
/// let map: &dyn Map = &scores;
/// assert_eq!(map.len(), 1);
/// assert!(map.get("alice").is_some());
/// assert_eq!(map.iter().next().map(|(k, _)| k), Some("alice"));
/// ```
///
/// [map-like]: https://doc.rust-lang.org/book/ch08-03-hash-maps.html
pub trait Map: Reflect {
    /// Returns a reference to the value associated with the given key.
    fn get(&self, key: &str) -> Option<&dyn Reflect>;

    /// Returns the number of entries in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// The order follows the underlying collection.
    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_>;
}
