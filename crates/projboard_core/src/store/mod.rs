//! Authoritative project state and change propagation.
//!
//! # Responsibility
//! - Own the ordered project sequence and the listener list.
//! - Fan out one snapshot per visible change, in listener registration order.
//!
//! # Invariants
//! - All mutation goes through `add_project` / `move_project`.
//! - Listeners only ever see copies of the sequence, never the live collection.
//! - Notification fires on every add, and on a move only when status changed.

pub mod project_store;
pub mod shared;

pub use project_store::{Listener, MoveOutcome, ProjectStore};
pub use shared::{project_store, SharedProjectStore};
