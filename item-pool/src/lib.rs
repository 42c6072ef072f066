//! A slot-recycling item pool for virtualized list and grid rendering.
//!
//! For adapter-level utilities (frame driving, slot-ordered arrangement), see the
//! `item-pool-adapter` crate.
//!
//! Virtualized UIs recompute the visible window on every scroll tick. A renderer
//! that keys its elements by row identity tears down and recreates expensive
//! per-item resources (nodes, measured layout, animation state) each time the
//! window shifts. This crate assigns every visible key a stable numeric
//! [`SlotId`] drawn from a bounded pool, so elements keyed by slot survive the
//! shift and are merely refilled with new content.
//!
//! It is UI-agnostic. A virtualization/layout layer is expected to provide:
//! - the ordered visible window as `(key, payload)` pairs
//! - a call to [`ItemPool::run_pending_cleanup`] once per render cycle, after
//!   the frame built from the last snapshot has been committed
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod key;
mod options;
mod pool;
mod scheduler;
mod table;
mod types;


pub use error::PoolError;
pub use key::{KeySet, PoolKey};
pub use options::PoolOptions;
pub use pool::ItemPool;
pub use types::{PoolStats, PooledItem, PooledItemRef, SlotId};
