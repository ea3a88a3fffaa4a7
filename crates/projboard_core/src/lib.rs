//! Core domain logic for the project board.
//! This crate is the single source of truth for project state and its
//! status transitions.

pub mod dnd;
pub mod input;
pub mod logging;
pub mod model;
pub mod store;

pub use dnd::{
    DragOverResponse, DragPayload, DropEffect, DropOutcome, DropTarget, DropZoneState,
    PayloadKind, ProjectCard, ProjectMover, PLAIN_TEXT_MIME,
};
pub use input::{validate, InputField, InputValidationError, InputValue, ProjectDraft, Validatable};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings};
pub use model::project::{Project, ProjectId, ProjectStatus, StatusParseError};
pub use store::{project_store, Listener, MoveOutcome, ProjectStore, SharedProjectStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
