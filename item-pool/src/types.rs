/// A reusable slot identity, `0 <= SlotId < max_pool_size`.
///
/// Slot ids are the unit of identity stability downstream rendering relies on
/// (e.g. to key an element across renders).
pub type SlotId = usize;

/// The record returned for one entry of the current visible snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PooledItem<K, P> {
    /// The slot assigned to `key`, stable across snapshots while the key stays pooled.
    pub slot_id: SlotId,
    pub key: K,
    pub payload: P,
    /// The entry's position within the current snapshot (0-based). Not a
    /// persistent identity; it changes whenever the window shifts.
    pub index: usize,
}

/// A borrowed view of one pooled record, yielded by
/// [`crate::ItemPool::for_each_pooled_item`].
#[derive(Debug)]
pub struct PooledItemRef<'a, K, P> {
    pub slot_id: SlotId,
    pub key: &'a K,
    pub payload: &'a P,
    pub index: usize,
}

impl<K: Clone, P: Clone> PooledItemRef<'_, K, P> {
    pub fn to_owned(&self) -> PooledItem<K, P> {
        PooledItem {
            slot_id: self.slot_id,
            key: self.key.clone(),
            payload: self.payload.clone(),
            index: self.index,
        }
    }
}

/// A lightweight snapshot of pool occupancy, for diagnostics and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolStats {
    /// Number of keys currently holding a slot.
    pub occupied: usize,
    /// Hard capacity (`max_pool_size`).
    pub capacity: usize,
    /// Soft retention target the cleanup pass shrinks toward (`pool_size`).
    pub retain_target: usize,
    /// Number of slot ids minted so far (the allocation high-water mark).
    pub minted: usize,
    /// Whether at least one cleanup pass is scheduled but has not run yet.
    pub cleanup_pending: bool,
}
