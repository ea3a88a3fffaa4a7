//! Drop target role played by a status list.

use crate::dnd::payload::DragPayload;
use crate::model::project::ProjectStatus;
use crate::store::project_store::{MoveOutcome, ProjectStore};
use crate::store::shared::SharedProjectStore;
use log::debug;

/// Store seam a drop target hands accepted drops to.
pub trait ProjectMover {
    fn move_project(&mut self, id: &str, status: ProjectStatus) -> MoveOutcome;
}

impl ProjectMover for ProjectStore {
    fn move_project(&mut self, id: &str, status: ProjectStatus) -> MoveOutcome {
        ProjectStore::move_project(self, id, status)
    }
}

impl ProjectMover for &SharedProjectStore {
    fn move_project(&mut self, id: &str, status: ProjectStatus) -> MoveOutcome {
        SharedProjectStore::move_project(self, id, status)
    }
}

/// Visual state of one drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZoneState {
    #[default]
    Idle,
    /// A compatible payload is hovering; the list is highlighted.
    Droppable,
}

/// Answer to a drag-over event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOverResponse {
    /// Payload is plain text; the platform's default rejection is suppressed.
    Accept,
    Reject,
}

/// Result of a drop event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The store was asked to move the project.
    Applied(MoveOutcome),
    /// Payload kind was not plain text; the store was not touched.
    Rejected,
}

/// A status list that accepts dragged project cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    status: ProjectStatus,
    state: DropZoneState,
}

impl DropTarget {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            state: DropZoneState::Idle,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn state(&self) -> DropZoneState {
        self.state
    }

    /// CSS class a renderer applies to the list element.
    pub fn css_class(&self) -> &'static str {
        match self.state {
            DropZoneState::Idle => "",
            DropZoneState::Droppable => "droppable",
        }
    }

    pub fn drag_over(&mut self, payload: &DragPayload) -> DragOverResponse {
        if !payload.kind.is_plain_text() {
            return DragOverResponse::Reject;
        }
        self.state = DropZoneState::Droppable;
        DragOverResponse::Accept
    }

    pub fn drag_leave(&mut self) {
        self.state = DropZoneState::Idle;
    }

    /// Handles a drop: forwards the payload id and this target's status to
    /// the mover, then leaves the droppable state.
    pub fn drop_payload<M>(&mut self, payload: &DragPayload, mover: &mut M) -> DropOutcome
    where
        M: ProjectMover + ?Sized,
    {
        self.state = DropZoneState::Idle;

        if !payload.kind.is_plain_text() {
            debug!(
                "event=drop module=dnd status=rejected target={} kind={}",
                self.status,
                payload.kind.as_mime()
            );
            return DropOutcome::Rejected;
        }

        let outcome = mover.move_project(payload.data.as_str(), self.status);
        debug!(
            "event=drop module=dnd status=ok target={} id={} moved={}",
            self.status,
            payload.data,
            outcome.is_moved()
        );
        DropOutcome::Applied(outcome)
    }
}
