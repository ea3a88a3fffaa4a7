//! Domain model for project tracking.
//!
//! # Responsibility
//! - Define canonical data structures shared by store, drag-drop and UI layers.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Status is a closed two-value enum; no null/unknown state is representable.

pub mod project;
