//! Adapter utilities for the `item-pool` crate.
//!
//! The `item-pool` crate is UI-agnostic and focuses on the core slot
//! bookkeeping. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - A frame-cycle controller that defers the pool's cleanup pass until the
//!   frame built from the last snapshot has been committed
//! - Slot-ordered arrangement for renderers that keep one element per slot
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod arrange;
mod controller;

#[cfg(test)]
mod tests;

pub use arrange::{arrange_by_slot, slot_span};
pub use controller::PoolController;
