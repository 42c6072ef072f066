use alloc::vec::Vec;
use core::mem;

use crate::key::{KeySet, PoolKey};
use crate::scheduler::CleanupQueue;
use crate::table::{KeyIndex, Slot, SlotTable};
use crate::{PoolError, PoolOptions, PoolStats, PooledItem, PooledItemRef, SlotId};

/// A bounded, slot-recycling pool of visible items.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; payloads are opaque caller-owned values
///   (use a cheap handle such as `Arc<T>` for heavy data).
/// - The virtualization layer drives it by supplying ordered visible
///   snapshots; rendering keys its elements by the returned slot ids.
/// - All mutation happens synchronously inside the owning render cycle. The
///   pool is not reentrant and must be invoked serially.
///
/// The deferred cleanup pass is explicit: computing a snapshot schedules one
/// pass, and the owning loop runs it via [`Self::run_pending_cleanup`] after
/// the frame has been committed. For a ready-made frame driver, see the
/// `item-pool-adapter` crate.
#[derive(Clone, Debug)]
pub struct ItemPool<K, P> {
    options: PoolOptions,
    table: SlotTable<K, P>,
    index: KeyIndex<K>,
    /// Keys of the most recent snapshot. Cleanup reads this at execution
    /// time, never a set captured when the pass was scheduled.
    visible: KeySet<K>,
    cleanup: CleanupQueue,
}

impl<K: PoolKey, P> ItemPool<K, P> {
    pub fn new(options: PoolOptions) -> Self {
        pdebug!(
            pool_size = options.pool_size,
            max_pool_size = options.max_pool_size,
            "ItemPool::new"
        );
        Self {
            options,
            table: SlotTable::new(),
            index: KeyIndex::new(),
            visible: KeySet::new(),
            cleanup: CleanupQueue::new(),
        }
    }

    pub fn options(&self) -> &PoolOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// Shrinking `max_pool_size` drops entries whose slot id is no longer in
    /// range (their keys are reassigned like new keys on their next
    /// appearance). If the new retention target is below current occupancy, a
    /// cleanup pass is scheduled.
    pub fn set_options(&mut self, options: PoolOptions) {
        let prev_capacity = self.options.max_pool_size;
        self.options = options;
        pdebug!(
            pool_size = self.options.pool_size,
            max_pool_size = self.options.max_pool_size,
            "ItemPool::set_options"
        );
        if self.options.max_pool_size < prev_capacity {
            self.trim_capacity();
        }
        if self.index.len() > self.options.retain_target() {
            self.cleanup.schedule();
        }
    }

    /// Copies the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut PoolOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    /// Number of keys currently holding a slot.
    pub fn occupied_len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.len() == 0
    }

    /// Hard capacity (`max_pool_size`).
    pub fn capacity(&self) -> usize {
        self.options.max_pool_size
    }

    /// Soft retention target the cleanup pass shrinks toward.
    pub fn retain_target(&self) -> usize {
        self.options.retain_target()
    }

    /// The slot currently assigned to `key`, if any.
    pub fn slot_of(&self, key: &K) -> Option<SlotId> {
        self.index.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.get(key).is_some()
    }

    /// Iterates over the occupied slots without allocations.
    pub fn for_each_entry(&self, mut f: impl FnMut(&K, SlotId, &P)) {
        for (slot, entry) in self.table.iter() {
            f(&entry.key, slot, &entry.payload);
        }
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            occupied: self.index.len(),
            capacity: self.options.max_pool_size,
            retain_target: self.options.retain_target(),
            minted: self.table.minted(),
            cleanup_pending: self.cleanup.is_pending(),
        }
    }

    /// Drops every entry and pending cleanup pass, keeping the options.
    pub fn clear(&mut self) {
        pdebug!(occupied = self.index.len(), "ItemPool::clear");
        self.table.clear();
        self.index.clear();
        self.visible.clear();
        self.cleanup.clear();
    }

    /// Computes pooled records for one visible snapshot.
    ///
    /// Each entry is assigned a slot (reusing the key's existing slot when it
    /// has one) with its position as `index`; the returned list has the same
    /// length and order as `visible_items`. One cleanup pass is scheduled; it
    /// runs only when the owner calls [`Self::run_pending_cleanup`], so the
    /// returned records are never invalidated by this call.
    ///
    /// Keys are expected to be unique within one snapshot; a duplicate takes
    /// the reuse path, so its records share a slot and the pool keeps the last
    /// payload/index.
    ///
    /// Fails with [`PoolError::Exhausted`] when an entry needs a slot while
    /// every slot is held by a visible key. Entries before the failing one
    /// keep their assignments.
    pub fn compute_pooled_items(
        &mut self,
        visible_items: &[(K, P)],
    ) -> Result<Vec<PooledItem<K, P>>, PoolError>
    where
        P: Clone,
    {
        let mut out = Vec::with_capacity(visible_items.len());
        self.for_each_pooled_item(visible_items, |item| out.push(item.to_owned()))?;
        Ok(out)
    }

    /// Like [`Self::compute_pooled_items`], but reuses a caller-owned buffer.
    ///
    /// This clears `out` first.
    pub fn collect_pooled_items(
        &mut self,
        visible_items: &[(K, P)],
        out: &mut Vec<PooledItem<K, P>>,
    ) -> Result<(), PoolError>
    where
        P: Clone,
    {
        out.clear();
        self.for_each_pooled_item(visible_items, |item| out.push(item.to_owned()))
    }

    /// Zero-allocation variant of [`Self::compute_pooled_items`]: `f` receives
    /// a borrowed record per entry, in snapshot order.
    pub fn for_each_pooled_item(
        &mut self,
        visible_items: &[(K, P)],
        mut f: impl FnMut(PooledItemRef<'_, K, P>),
    ) -> Result<(), PoolError>
    where
        P: Clone,
    {
        let mut visible = mem::take(&mut self.visible);
        visible.clear();
        for (key, _) in visible_items {
            visible.insert(key.clone());
        }

        let mut failed = None;
        for (i, (key, payload)) in visible_items.iter().enumerate() {
            match self.allocate_or_reuse(key.clone(), payload.clone(), i, &visible) {
                Ok(slot) => {
                    if let Some(entry) = self.table.get(slot) {
                        f(PooledItemRef {
                            slot_id: slot,
                            key: &entry.key,
                            payload: &entry.payload,
                            index: entry.index,
                        });
                    } else {
                        debug_assert!(false, "assigned slot {slot} is vacant");
                    }
                }
                Err(err) => {
                    failed = Some(err);
                    break;
                }
            }
        }

        // The snapshot defines visibility from here on, even when an entry
        // could not be placed: its key is visible regardless.
        self.visible = visible;
        self.cleanup.schedule();
        ptrace!(
            items = visible_items.len(),
            occupied = self.index.len(),
            "snapshot computed"
        );

        match failed {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Assigns a slot to `key` and returns its id.
    ///
    /// A key that already holds a slot keeps it; only its payload and `index`
    /// are refreshed in place. Otherwise the lowest vacated slot is reused, a
    /// fresh id is minted while the capacity allows, and as a last resort the
    /// first slot whose key is absent from `visible` is evicted.
    ///
    /// `visible` must be the key set of the current snapshot. The snapshot
    /// entry points maintain it; when driving this method directly, keep the
    /// pool's record current via [`Self::set_visible_keys`] so cleanup sees
    /// the same visibility.
    pub fn allocate_or_reuse(
        &mut self,
        key: K,
        payload: P,
        index: usize,
        visible: &KeySet<K>,
    ) -> Result<SlotId, PoolError> {
        if let Some(slot) = self.index.get(&key) {
            if let Some(entry) = self.table.get_mut(slot) {
                debug_assert!(entry.key == key, "slot {slot} holds a different key");
                entry.payload = payload;
                entry.index = index;
                return Ok(slot);
            }
            // Unreachable while the table and index are consistent.
            debug_assert!(false, "key bound to vacant slot {slot}");
            self.index.remove(&key);
        }

        let Some(slot) = self.claim_slot(visible) else {
            pwarn!(
                index,
                capacity = self.options.max_pool_size,
                "pool exhausted: every slot is held by a visible key"
            );
            return Err(PoolError::Exhausted {
                index,
                capacity: self.options.max_pool_size,
            });
        };

        self.table.put(
            slot,
            Slot {
                key: key.clone(),
                payload,
                index,
            },
        );
        self.index.insert(key, slot);
        ptrace!(slot, index, "slot assigned");
        Ok(slot)
    }

    /// Finds a slot for a new key: lowest gap, then a fresh id, then eviction
    /// of the first entry whose key is not visible.
    fn claim_slot(&mut self, visible: &KeySet<K>) -> Option<SlotId> {
        if let Some(slot) = self.table.first_gap() {
            return Some(slot);
        }

        let minted = self.table.minted();
        if minted < self.options.max_pool_size {
            return Some(minted);
        }

        let victim = self
            .index
            .iter()
            .find(|&(key, _)| !visible.contains(key))
            .map(|(key, slot)| (key.clone(), slot));
        let (key, slot) = victim?;
        self.index.remove(&key);
        self.table.remove(slot);
        pdebug!(slot, "evicted non-visible entry");
        Some(slot)
    }

    /// Replaces the pool's record of the currently visible keys.
    ///
    /// The snapshot entry points maintain this automatically; call it only
    /// when driving [`Self::allocate_or_reuse`] directly.
    pub fn set_visible_keys(&mut self, keys: impl IntoIterator<Item = K>) {
        self.visible.clear();
        for key in keys {
            self.visible.insert(key);
        }
    }

    /// Schedules one deferred cleanup pass.
    pub fn schedule_cleanup(&mut self) {
        self.cleanup.schedule();
    }

    /// Whether at least one cleanup pass is scheduled but has not run yet.
    pub fn cleanup_pending(&self) -> bool {
        self.cleanup.is_pending()
    }

    /// Runs one scheduled cleanup pass, if any.
    ///
    /// The pass consults visibility as of *now*: a pass scheduled before a
    /// newer snapshot ran must not evict keys that snapshot made visible
    /// again, so it re-reads the pool's record rather than anything captured
    /// at schedule time. A pass left redundant by an earlier one removes
    /// nothing. Returns the number of entries released.
    pub fn run_pending_cleanup(&mut self) -> usize {
        if !self.cleanup.take() {
            return 0;
        }
        self.reconcile()
    }

    /// Runs a cleanup pass immediately, scheduled or not.
    pub fn force_cleanup(&mut self) -> usize {
        self.reconcile()
    }

    /// Removes entries for non-visible keys while occupancy exceeds the
    /// retention target. Capacity is untouched; re-running with unchanged
    /// state removes nothing.
    fn reconcile(&mut self) -> usize {
        let target = self.options.retain_target();
        let occupied = self.index.len();
        if occupied <= target {
            return 0;
        }

        let mut excess = occupied - target;
        let mut victims: Vec<(K, SlotId)> = Vec::new();
        for (key, slot) in self.index.iter() {
            if excess == 0 {
                break;
            }
            if !self.visible.contains(key) {
                victims.push((key.clone(), slot));
                excess -= 1;
            }
        }

        let released = victims.len();
        for (key, slot) in victims {
            self.index.remove(&key);
            self.table.remove(slot);
        }
        if released > 0 {
            pdebug!(
                released,
                occupied = self.index.len(),
                "cleanup pass released entries"
            );
        }
        released
    }

    /// Drops entries whose slot id fell out of range after a capacity shrink.
    fn trim_capacity(&mut self) {
        let capacity = self.options.max_pool_size;
        let mut dropped = 0usize;
        for slot in capacity..self.table.minted() {
            if let Some(entry) = self.table.get(slot) {
                let key = entry.key.clone();
                self.index.remove(&key);
                dropped += 1;
            }
        }
        self.table.truncate(capacity);
        if dropped > 0 {
            pdebug!(dropped, capacity, "capacity shrink dropped entries");
        }
    }
}
