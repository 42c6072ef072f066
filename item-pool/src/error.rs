use core::fmt;

/// Errors surfaced by [`crate::ItemPool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// Every slot is occupied by a currently visible key, so a new key cannot
    /// be assigned without corrupting an existing entry.
    ///
    /// Recoverable: the caller may skip rendering the entry this cycle, or
    /// raise `max_pool_size` and recompute. Entries allocated before the
    /// failing one keep their slots.
    Exhausted {
        /// Snapshot position of the entry that could not be assigned.
        index: usize,
        /// The pool's hard capacity at the time of the failure.
        capacity: usize,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { index, capacity } => write!(
                f,
                "item pool exhausted: no evictable slot for entry {index} (capacity {capacity})"
            ),
        }
    }
}

impl core::error::Error for PoolError {}
