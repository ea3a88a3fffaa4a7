//! Drag source role played by a rendered project card.

use crate::dnd::payload::DragPayload;
use crate::model::project::{Project, ProjectId};
use log::debug;

/// A project as rendered inside a status list.
///
/// Holds a snapshot copy for display; dragging it exposes only the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    project: Project,
}

impl ProjectCard {
    pub fn new(project: Project) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn id(&self) -> &ProjectId {
        &self.project.id
    }

    /// Human-readable headcount, e.g. `1 person` / `4 persons`.
    pub fn people_label(&self) -> String {
        match self.project.people {
            1 => "1 person".to_string(),
            n => format!("{n} persons"),
        }
    }

    /// Starts a drag: the payload carries the project id as plain text and
    /// permits moving only.
    pub fn drag_start(&self) -> DragPayload {
        debug!("event=drag_start module=dnd id={}", self.project.id);
        DragPayload::plain_text(self.project.id.as_str())
    }

    /// Ends a drag. Visual cleanup only; state is untouched.
    pub fn drag_end(&self) {
        debug!("event=drag_end module=dnd id={}", self.project.id);
    }
}

impl From<Project> for ProjectCard {
    fn from(project: Project) -> Self {
        Self::new(project)
    }
}
