//! Hasher states used by the registries.
//!
//! Name-keyed tables hash through [`FixedHashState`], a `foldhash` state with
//! a constant seed. Two processes registering the same types therefore walk
//! their tables in the same order, which keeps registry dumps comparable.
//!
//! Tables keyed by [`TypeId`](core::any::TypeId) use [`NoOpHashState`]: the
//! id is already a well mixed `u64` and only needs to be forwarded.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

/// Seed shared by every [`FixedHashState`].
const SEED: u64 = 0x6A73_6F6E_6963_0001;

// -----------------------------------------------------------------------------
// Fixed

/// Builds `foldhash` hashers from a constant seed.
///
/// ```
/// use core::hash::BuildHasher;
/// use jsonic_utils::hash::FixedHashState;
///
/// let first = FixedHashState.hash_one("geo::Coordinate");
/// let second = FixedHashState.hash_one("geo::Coordinate");
/// assert_eq!(first, second);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> FoldHasher<'static> {
        const STATE: FixedState = FixedState::with_seed(SEED);
        STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// Pass-through

/// Forwards the last `u64` it was fed.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher(u64);

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }

    fn write(&mut self, bytes: &[u8]) {
        // Only reached by keys that do not hash as a single u64.
        self.0 = bytes
            .iter()
            .fold(self.0, |acc, byte| acc.rotate_left(8) ^ u64::from(*byte));
    }
}

/// Builds [`NoOpHasher`]s.
///
/// ```
/// use core::hash::BuildHasher;
/// use jsonic_utils::hash::NoOpHashState;
///
/// assert_eq!(NoOpHashState.hash_one(42_u64), 42);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline]
    fn build_hasher(&self) -> NoOpHasher {
        NoOpHasher::default()
    }
}
