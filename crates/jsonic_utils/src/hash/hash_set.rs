//! Re-export [`HashSet`] from [hashbrown] crate, defaulting to [`FixedHashState`].

use hashbrown::hash_set as hb;

use super::FixedHashState;

pub use hb::{IntoIter, Iter};

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hb::HashSet<T, S>;
