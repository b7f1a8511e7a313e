//! Hash containers keyed with a process-independent hasher.
//!
//! [`HashMap`] and [`HashSet`] are the `hashbrown` containers with
//! [`FixedHashState`] as their default state.

mod hasher;

pub mod hash_map;
pub mod hash_set;

pub use hash_map::HashMap;
pub use hash_set::HashSet;
pub use hasher::{FixedHashState, NoOpHashState, NoOpHasher};

pub use hashbrown;
