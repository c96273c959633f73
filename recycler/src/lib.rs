//! A headless cell-recycling engine for virtualized lists.
//!
//! For adapter-level utilities (controllers, an in-memory reference host), see the
//! `recycler-adapter` crate.
//!
//! This crate virtualizes a long logical list behind a small fixed pool of reusable cells:
//! tracking the visible index window as the viewport scrolls, recycling off-screen cells one
//! step at a time onto the opposite edge, and re-indexing/repositioning the pool when items
//! are inserted or removed mid-list. Memory and rendering cost stay bounded regardless of
//! list length.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide, via [`ViewHost`]:
//! - viewport size and scroll offset
//! - a view factory that creates one opaque handle per pool slot
//! - visibility toggling and a batched position-apply primitive
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod geometry;
mod host;
mod options;
mod pool;
mod recycler;
mod types;


pub use error::{ConfigError, RemoveError};
pub use geometry::Geometry;
pub use host::{PositionUpdate, ViewHost};
pub use options::{ClearCallback, PopulateCallback, RecyclerOptions};
pub use recycler::Recycler;
pub use types::{CellState, ListChange, ScrollDirection, ScrollState, Window};
