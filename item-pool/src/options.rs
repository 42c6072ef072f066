/// Configuration for [`crate::ItemPool`].
///
/// `pool_size` is the soft retention target: the deferred cleanup pass shrinks
/// occupancy toward it, keeping some no-longer-visible entries pooled so that
/// scrolling back does not reallocate slots just released. `max_pool_size` is
/// the hard capacity; the pool never holds more entries than this, evicting
/// non-visible ones to make room when full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolOptions {
    /// Soft retention target for the cleanup pass.
    pub pool_size: usize,
    /// Hard capacity; also the exclusive upper bound of every [`crate::SlotId`].
    pub max_pool_size: usize,
}

pub(crate) const DEFAULT_POOL_SIZE: usize = 100;
pub(crate) const DEFAULT_MAX_POOL_SIZE: usize = 200;

impl PoolOptions {
    /// Creates options, clamping to at least one slot and `max_pool_size >= pool_size`.
    pub fn new(pool_size: usize, max_pool_size: usize) -> Self {
        let pool_size = pool_size.max(1);
        Self {
            pool_size,
            max_pool_size: max_pool_size.max(pool_size),
        }
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn with_max_pool_size(mut self, max_pool_size: usize) -> Self {
        self.max_pool_size = max_pool_size;
        self
    }

    /// The effective retention target: `pool_size`, clamped to the capacity.
    ///
    /// Fields are public and may be set to inconsistent values directly; the
    /// pool reads the target through this accessor.
    pub fn retain_target(&self) -> usize {
        self.pool_size.min(self.max_pool_size)
    }
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE, DEFAULT_MAX_POOL_SIZE)
    }
}
