//! Adapter utilities for the `recycler` crate.
//!
//! The `recycler` crate is UI-agnostic and focuses on the core windowing/recycling state.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - [`Controller`]: owns a host + engine pair and turns raw scroll/mutation events into
//!   core calls
//! - [`MemoryHost`]: an in-memory reference host, useful for simulations, tests, and as a
//!   template for real host implementations
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod memory;


pub use controller::Controller;
pub use memory::{MemoryHost, MemorySlot};
