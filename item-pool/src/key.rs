#[cfg(not(feature = "std"))]
use alloc::collections::{BTreeMap, BTreeSet};
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "std")]
pub(crate) type KeySlotMap<K> = HashMap<K, crate::SlotId>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySlotMap<K> = BTreeMap<K, crate::SlotId>;

/// The set of keys present in one visible snapshot.
#[cfg(feature = "std")]
pub type KeySet<K> = HashSet<K>;
/// The set of keys present in one visible snapshot.
#[cfg(not(feature = "std"))]
pub type KeySet<K> = BTreeSet<K>;

/// Bound required of pool keys.
///
/// Blanket-implemented: `Hash + Eq + Clone` under `std`, `Ord + Clone` otherwise.
#[cfg(feature = "std")]
pub trait PoolKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> PoolKey for K {}

/// Bound required of pool keys.
///
/// Blanket-implemented: `Hash + Eq + Clone` under `std`, `Ord + Clone` otherwise.
#[cfg(not(feature = "std"))]
pub trait PoolKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> PoolKey for K {}
