//! Single-owner project store with a synchronous change notifier.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::debug;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Callback invoked with a full snapshot after each visible change.
pub type Listener = Arc<dyn Fn(&[Project]) + Send + Sync>;

/// Result of a status transition request.
///
/// None of these variants is an error: stale or repeated drops are expected
/// and must leave the application running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Status changed and listeners were notified.
    Moved {
        from: ProjectStatus,
        to: ProjectStatus,
    },
    /// Project already had the requested status. Nobody was notified.
    Unchanged,
    /// No project with that id. Nobody was notified.
    NotFound,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Ordered project collection plus its registered listeners.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

/// A snapshot paired with the listeners it must reach.
///
/// Built while the store is borrowed, dispatched after the borrow ends so
/// that listeners may call back into the store.
pub(crate) struct Notification {
    snapshot: Vec<Project>,
    listeners: Vec<Listener>,
}

impl Notification {
    pub(crate) fn dispatch(self) {
        debug!(
            "event=store_notify module=store projects={} listeners={}",
            self.snapshot.len(),
            self.listeners.len()
        );
        for listener in &self.listeners {
            listener(&self.snapshot);
        }
    }
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new active project and notifies every listener.
    ///
    /// Inputs are assumed pre-validated; this never fails.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let (id, notification) = self.insert_project(title, description, people);
        notification.dispatch();
        id
    }

    /// Moves the project with `id` to `status`.
    ///
    /// Unknown ids and same-status moves are silent no-ops.
    pub fn move_project(&mut self, id: &str, status: ProjectStatus) -> MoveOutcome {
        let (outcome, notification) = self.apply_move(id, status);
        if let Some(notification) = notification {
            notification.dispatch();
        }
        outcome
    }

    /// Registers a listener for all future changes.
    ///
    /// Listeners are called in registration order and are never removed.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: Fn(&[Project]) + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
        debug!(
            "event=listener_registered module=store listeners={}",
            self.listeners.len()
        );
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn insert_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> (ProjectId, Notification) {
        let project = Project::new(title, description, people);
        let id = project.id.clone();
        self.projects.push(project);
        debug!(
            "event=project_added module=store id={} total={}",
            id,
            self.projects.len()
        );
        (id, self.prepare_notification())
    }

    pub(crate) fn apply_move(
        &mut self,
        id: &str,
        status: ProjectStatus,
    ) -> (MoveOutcome, Option<Notification>) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id.as_str() == id) else {
            debug!("event=project_move module=store status=not_found id={id}");
            return (MoveOutcome::NotFound, None);
        };

        if project.status == status {
            debug!("event=project_move module=store status=unchanged id={id} to={status}");
            return (MoveOutcome::Unchanged, None);
        }

        let from = project.status;
        project.status = status;
        debug!("event=project_move module=store status=ok id={id} from={from} to={status}");
        (
            MoveOutcome::Moved { from, to: status },
            Some(self.prepare_notification()),
        )
    }

    fn prepare_notification(&self) -> Notification {
        Notification {
            snapshot: self.projects.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl Debug for ProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectStore")
            .field("projects", &self.projects.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
