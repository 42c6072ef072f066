use alloc::vec::Vec;

use item_pool::{ItemPool, PoolError, PoolKey, PoolOptions, PooledItem};

/// A framework-neutral controller that wraps an `item_pool::ItemPool` and
/// drives its deferred cleanup once per render cycle.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `render(visible)` with the current visible window when a frame is built
/// - `end_frame()` after the frame has been committed
///
/// Keeping cleanup in `end_frame` guarantees the frame renders from a fully
/// populated pool: no slot referenced by the returned records is reclaimed
/// before the renderer is done with them.
#[derive(Clone, Debug)]
pub struct PoolController<K, P> {
    pool: ItemPool<K, P>,
}

impl<K: PoolKey, P> PoolController<K, P> {
    pub fn new(options: PoolOptions) -> Self {
        Self {
            pool: ItemPool::new(options),
        }
    }

    pub fn from_pool(pool: ItemPool<K, P>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &ItemPool<K, P> {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut ItemPool<K, P> {
        &mut self.pool
    }

    pub fn into_pool(self) -> ItemPool<K, P> {
        self.pool
    }

    /// Computes pooled records for the current visible window.
    ///
    /// Cleanup stays pending until [`Self::end_frame`] runs, so every record
    /// returned here remains valid for the rest of the frame.
    pub fn render(&mut self, visible: &[(K, P)]) -> Result<Vec<PooledItem<K, P>>, PoolError>
    where
        P: Clone,
    {
        self.pool.compute_pooled_items(visible)
    }

    /// Drains the cleanup passes left pending by earlier `render` calls.
    ///
    /// Returns the number of entries released.
    pub fn end_frame(&mut self) -> usize {
        let mut released = 0;
        while self.pool.cleanup_pending() {
            released += self.pool.run_pending_cleanup();
        }
        released
    }

    /// Renders and immediately completes the frame.
    ///
    /// Convenient for offscreen or test flows where nothing holds the records
    /// between render and commit.
    pub fn frame(&mut self, visible: &[(K, P)]) -> Result<Vec<PooledItem<K, P>>, PoolError>
    where
        P: Clone,
    {
        let items = self.render(visible)?;
        self.end_frame();
        Ok(items)
    }
}
