use alloc::vec::Vec;

use crate::key::{KeySlotMap, PoolKey};
use crate::types::SlotId;

/// One occupied slot: the key currently bound to it, the caller-owned payload,
/// and the entry's position within the most recent snapshot.
#[derive(Clone, Debug)]
pub(crate) struct Slot<K, P> {
    pub(crate) key: K,
    pub(crate) payload: P,
    pub(crate) index: usize,
}

/// Maps a [`SlotId`] to the data currently occupying it.
///
/// Slot ids are indexes into the backing vector; the vector's length is the
/// allocation high-water mark (ids are minted by growing it). A `None` below
/// the high-water mark is a previously minted slot with no current key.
#[derive(Clone, Debug)]
pub(crate) struct SlotTable<K, P> {
    slots: Vec<Option<Slot<K, P>>>,
}

impl<K, P> SlotTable<K, P> {
    pub(crate) fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Number of slot ids minted so far.
    pub(crate) fn minted(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn get(&self, slot: SlotId) -> Option<&Slot<K, P>> {
        self.slots.get(slot).and_then(|s| s.as_ref())
    }

    pub(crate) fn get_mut(&mut self, slot: SlotId) -> Option<&mut Slot<K, P>> {
        self.slots.get_mut(slot).and_then(|s| s.as_mut())
    }

    /// Fills `slot`, minting it first when it is the next unminted id.
    pub(crate) fn put(&mut self, slot: SlotId, entry: Slot<K, P>) {
        if slot == self.slots.len() {
            self.slots.push(Some(entry));
            return;
        }
        debug_assert!(
            slot < self.slots.len(),
            "slot {slot} minted out of order (minted={})",
            self.slots.len()
        );
        debug_assert!(
            self.slots[slot].is_none(),
            "slot {slot} is already occupied"
        );
        self.slots[slot] = Some(entry);
    }

    pub(crate) fn remove(&mut self, slot: SlotId) -> Option<Slot<K, P>> {
        self.slots.get_mut(slot).and_then(|s| s.take())
    }

    /// The lowest minted slot with no current key, if any.
    pub(crate) fn first_gap(&self) -> Option<SlotId> {
        self.slots.iter().position(|s| s.is_none())
    }

    /// Drops every slot id at or above `minted`.
    pub(crate) fn truncate(&mut self, minted: usize) {
        self.slots.truncate(minted);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (SlotId, &Slot<K, P>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, s)| s.as_ref().map(|entry| (slot, entry)))
    }
}

/// Maps an externally supplied key to the slot currently assigned to it.
///
/// At most one key maps to a given slot at any time; the pool creates and
/// removes the (index entry, table entry) pair as a unit.
#[derive(Clone, Debug)]
pub(crate) struct KeyIndex<K> {
    map: KeySlotMap<K>,
}

impl<K: PoolKey> KeyIndex<K> {
    pub(crate) fn new() -> Self {
        Self {
            map: KeySlotMap::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn get(&self, key: &K) -> Option<SlotId> {
        self.map.get(key).copied()
    }

    pub(crate) fn insert(&mut self, key: K, slot: SlotId) {
        debug_assert!(
            !self.map.values().any(|&s| s == slot),
            "two keys bound to slot {slot}"
        );
        let prev = self.map.insert(key, slot);
        debug_assert!(prev.is_none(), "key rebound without removal");
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<SlotId> {
        self.map.remove(key)
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, SlotId)> {
        self.map.iter().map(|(k, &s)| (k, s))
    }
}
