//! Re-export [`HashMap`] from [hashbrown] crate, defaulting to [`FixedHashState`].

use hashbrown::hash_map as hb;

use super::FixedHashState;

pub use hb::{Entry, OccupiedEntry, VacantEntry};
pub use hb::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// Iteration order only depends on the inserted keys, not on a random seed.
///
/// # Examples
///
/// ```
/// use jsonic_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::default();
/// map.insert("a", 1);
/// assert_eq!(map.get("a"), Some(&1));
/// ```
pub type HashMap<K, V, S = FixedHashState> = hb::HashMap<K, V, S>;
