use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::{self, Vec};
use core::fmt;
use core::hash::BuildHasher;
use core::iter::Flatten;

use jsonic_utils::hash::FixedHashState;
use jsonic_utils::hash::hashbrown::HashTable;

use crate::Reflect;
use crate::info::TypePath;
use crate::ops::{Map, ReflectRef};
use crate::value::Dynamic;

// -----------------------------------------------------------------------------
// DynamicMap

/// A string-keyed mapping of deserialized values, in insertion order.
///
/// Keys are unique: [`insert`](DynamicMap::insert) replaces the value of an
/// existing key in place. Lookups go through a hash index over the entry
/// slots.
///
/// # Examples
///
/// ```
/// use jsonic_reflect::value::{Dynamic, DynamicMap};
///
/// let mut map = DynamicMap::new();
/// map.insert("b".into(), Dynamic::from(1_u8));
/// map.insert("a".into(), Dynamic::from(2_u8));
/// map.insert("b".into(), Dynamic::from(3_u8));
///
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);
/// assert_eq!(map.get("b").and_then(Dynamic::as_u64), Some(3));
/// ```
#[derive(Default)]
pub struct DynamicMap {
    /// Entry slots in insertion order, `None` once removed.
    slots: Vec<Option<(String, Dynamic)>>,
    /// Indices into `slots` of the live entries.
    index: HashTable<usize>,
}

#[inline]
fn hash_key(key: &str) -> u64 {
    FixedHashState.hash_one(key)
}

#[inline]
fn slot_is(slots: &[Option<(String, Dynamic)>], slot: usize, key: &str) -> bool {
    matches!(&slots[slot], Some((k, _)) if k == key)
}

impl DynamicMap {
    /// Creates an empty `DynamicMap`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashTable::new(),
        }
    }

    /// Creates an empty `DynamicMap` with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            index: HashTable::with_capacity(capacity),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        let slots = &self.slots;
        self.index
            .find(hash_key(key), |&slot| slot_is(slots, slot, key))
            .copied()
    }

    /// Inserts an entry, returning the previous value of the key.
    pub fn insert(&mut self, key: String, value: Dynamic) -> Option<Dynamic> {
        if let Some(slot) = self.position(&key)
            && let Some((_, old)) = self.slots[slot].as_mut()
        {
            return Some(core::mem::replace(old, value));
        }

        let slot = self.slots.len();
        let slots = &self.slots;
        self.index.insert_unique(hash_key(&key), slot, |&other| match &slots[other] {
            Some((k, _)) => hash_key(k),
            None => 0,
        });
        self.slots.push(Some((key, value)));
        None
    }

    /// Returns the value of the key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Dynamic> {
        let slot = self.position(key)?;
        self.slots[slot].as_ref().map(|(_, v)| v)
    }

    /// Returns the value of the key by mutable reference.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Dynamic> {
        let slot = self.position(key)?;
        self.slots[slot].as_mut().map(|(_, v)| v)
    }

    /// Removes an entry, keeping the order of the remaining ones.
    pub fn remove(&mut self, key: &str) -> Option<Dynamic> {
        let slots = &self.slots;
        let entry = self
            .index
            .find_entry(hash_key(key), |&slot| slot_is(slots, slot, key))
            .ok()?;
        let (slot, _) = entry.remove();
        self.slots[slot].take().map(|(_, v)| v)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns an iterator over the keys, in order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over the entries, in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dynamic)> {
        self.slots.iter().flatten().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Debug for DynamicMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<(String, Dynamic)> for DynamicMap {
    fn from_iter<I: IntoIterator<Item = (String, Dynamic)>>(items: I) -> Self {
        let items = items.into_iter();
        let mut map = Self::with_capacity(items.size_hint().0);
        for (key, value) in items {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for DynamicMap {
    type Item = (String, Dynamic);
    type IntoIter = Flatten<vec::IntoIter<Option<(String, Dynamic)>>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter().flatten()
    }
}

impl TypePath for DynamicMap {
    #[inline]
    fn type_path() -> &'static str {
        "jsonic_reflect::value::DynamicMap"
    }

    #[inline]
    fn type_name() -> &'static str {
        "DynamicMap"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("jsonic_reflect::value")
    }
}

impl Reflect for DynamicMap {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Map(self)
    }
}

impl Map for DynamicMap {
    #[inline]
    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        DynamicMap::get(self, key).map(|v| v as &dyn Reflect)
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
        Box::new(DynamicMap::iter(self).map(|(k, v)| (k, v as &dyn Reflect)))
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::DynamicMap;
    use crate::value::Dynamic;

    #[test]
    fn remove_keeps_order_and_frees_the_key() {
        let mut map = DynamicMap::new();
        for key in ["x", "y", "z"] {
            map.insert(key.into(), Dynamic::from(key));
        }

        assert_eq!(map.remove("y").as_ref().and_then(Dynamic::as_str), Some("y"));
        assert!(map.remove("y").is_none());
        assert!(!map.contains_key("y"));
        assert_eq!(map.len(), 2);

        map.insert("y".into(), Dynamic::Null);
        assert_eq!(map.keys().collect::<Vec<_>>(), ["x", "z", "y"]);
        assert_eq!(map.into_iter().map(|(k, _)| k).collect::<Vec<_>>(), ["x", "z", "y"]);
    }

    #[test]
    fn many_keys() {
        let map: DynamicMap = (0..50_000_u32)
            .map(|i| (format!("k{i}"), Dynamic::from(i)))
            .collect();

        assert_eq!(map.len(), 50_000);
        assert_eq!(map.get("k0").and_then(Dynamic::as_u64), Some(0));
        assert_eq!(map.get("k49999").and_then(Dynamic::as_u64), Some(49_999));
        assert!(map.get("k50000").is_none());
        assert_eq!(map.keys().nth(1234), Some("k1234"));
    }
}
