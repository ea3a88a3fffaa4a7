//! Drag-and-drop status transition protocol.
//!
//! # Responsibility
//! - Define the drag payload contract between project cards and status lists.
//! - Turn an accepted drop into exactly one store transition request.
//!
//! # Invariants
//! - Only the project id crosses the drag boundary; the store stays the sole
//!   authority on project data.
//! - Payloads whose kind is not plain text are ignored, never escalated.
//! - Drop targets cycle `Idle -> Droppable -> Idle` for the application's lifetime.

pub mod payload;
pub mod source;
pub mod target;

pub use payload::{DragPayload, DropEffect, PayloadKind, PLAIN_TEXT_MIME};
pub use source::ProjectCard;
pub use target::{DragOverResponse, DropOutcome, DropTarget, DropZoneState, ProjectMover};
