use core::any::TypeId;
use core::fmt;

use crate::hash::NoOpHashState;
use crate::hash::hashbrown::HashMap;

/// A table keyed by [`TypeId`].
///
/// The registries keep per-type entries here, such as the serialize hook of a
/// concrete Rust type. Ids are forwarded unchanged through
/// [`NoOpHashState`].
///
/// ```
/// use core::any::TypeId;
/// use jsonic_utils::TypeIdMap;
///
/// let mut hooks = TypeIdMap::new();
/// hooks.insert(TypeId::of::<f64>(), "float hook");
///
/// assert!(hooks.contains_type::<f64>());
/// assert_eq!(hooks.get(&TypeId::of::<f64>()), Some(&"float hook"));
/// assert!(hooks.get(&TypeId::of::<i64>()).is_none());
/// ```
pub struct TypeIdMap<V> {
    entries: HashMap<TypeId, V, NoOpHashState>,
}

impl<V> TypeIdMap<V> {
    /// An empty table.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(NoOpHashState),
        }
    }

    /// Stores `value` for `id` and hands back the entry it displaced.
    pub fn insert(&mut self, id: TypeId, value: V) -> Option<V> {
        self.entries.insert(id, value)
    }

    #[inline]
    pub fn get(&self, id: &TypeId) -> Option<&V> {
        self.entries.get(id)
    }

    /// Whether an entry exists for `T`.
    #[inline]
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored entries, in no particular order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.entries.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TypeIdMap<V> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.values()).finish()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeIdMap;

    #[test]
    fn later_insert_displaces_earlier() {
        let mut map = TypeIdMap::new();
        assert_eq!(map.insert(TypeId::of::<u8>(), "first"), None);
        assert_eq!(map.insert(TypeId::of::<u8>(), "second"), Some("first"));
        assert_eq!(map.len(), 1);
        assert_eq!(map.values().copied().collect::<alloc::vec::Vec<_>>(), ["second"]);
    }

    #[test]
    fn distinct_types_do_not_collide() {
        let mut map = TypeIdMap::default();
        map.insert(TypeId::of::<u32>(), 1);
        map.insert(TypeId::of::<i32>(), 2);
        map.insert(TypeId::of::<str>(), 3);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&TypeId::of::<i32>()), Some(&2));
        assert!(!map.contains_type::<u64>());
        assert!(!map.is_empty());
    }
}
