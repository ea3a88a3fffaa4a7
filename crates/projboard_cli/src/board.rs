//! Two status lists rendered from store snapshots.
//!
//! Each list keeps its own copy of the projects in its status and doubles as
//! the drop target for that status.

use projboard_core::{
    DragOverResponse, DragPayload, DropOutcome, DropTarget, Listener, Project, ProjectCard,
    ProjectMover, ProjectStatus,
};
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const SHORT_ID_LEN: usize = 8;

/// Rendered list for one status.
#[derive(Debug)]
pub struct StatusListView {
    status: ProjectStatus,
    cards: Vec<ProjectCard>,
}

impl StatusListView {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            status,
            cards: Vec::new(),
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn element_id(&self) -> String {
        format!("{}-projects-list", self.status)
    }

    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_ascii_uppercase())
    }

    pub fn cards(&self) -> &[ProjectCard] {
        &self.cards
    }

    /// Replaces the rendered cards with this status' slice of `snapshot`.
    pub fn apply_snapshot(&mut self, snapshot: &[Project]) {
        self.cards = snapshot
            .iter()
            .filter(|project| project.status == self.status)
            .cloned()
            .map(ProjectCard::new)
            .collect();
    }

    pub fn render(&self) -> String {
        let mut out = format!("== {} [{}] ==\n", self.heading(), self.element_id());
        if self.cards.is_empty() {
            out.push_str("  (empty)\n");
        }
        for card in &self.cards {
            let project = card.project();
            let id = project.id.as_str();
            let short_id = id.get(..SHORT_ID_LEN).unwrap_or(id);
            let _ = writeln!(
                out,
                "  [{short_id}] {} ({} assigned)\n      {}",
                project.title,
                card.people_label(),
                project.description
            );
        }
        out
    }
}

/// Both status lists plus the latest snapshot they were rendered from.
pub struct Board {
    views: Vec<Arc<Mutex<StatusListView>>>,
    targets: Vec<DropTarget>,
    latest: Arc<Mutex<Vec<Project>>>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            views: ProjectStatus::ALL
                .into_iter()
                .map(|status| Arc::new(Mutex::new(StatusListView::new(status))))
                .collect(),
            targets: ProjectStatus::ALL.into_iter().map(DropTarget::new).collect(),
            latest: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Listeners to register with the store: one per list, then one that
    /// keeps the latest snapshot for `json` dumps.
    pub fn listeners(&self) -> Vec<Listener> {
        let mut listeners: Vec<Listener> = self
            .views
            .iter()
            .map(|view| {
                let view = Arc::clone(view);
                Arc::new(move |snapshot: &[Project]| lock(&view).apply_snapshot(snapshot))
                    as Listener
            })
            .collect();
        let latest = Arc::clone(&self.latest);
        listeners.push(Arc::new(move |snapshot: &[Project]| {
            *lock(&latest) = snapshot.to_vec();
        }));
        listeners
    }

    pub fn render(&self) -> String {
        self.views
            .iter()
            .map(|view| lock(view).render())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn latest_snapshot(&self) -> Vec<Project> {
        lock(&self.latest).clone()
    }

    /// Resolves an exact id or a unique prefix among rendered cards.
    pub fn find_card(&self, id_or_prefix: &str) -> Option<ProjectCard> {
        let mut matches = Vec::new();
        for view in &self.views {
            for card in lock(view).cards() {
                if card.id().as_str() == id_or_prefix {
                    return Some(card.clone());
                }
                if card.id().as_str().starts_with(id_or_prefix) {
                    matches.push(card.clone());
                }
            }
        }
        match matches.len() {
            1 => matches.pop(),
            _ => None,
        }
    }

    /// Plays a full drag gesture of `id_or_prefix` onto the `target` list.
    ///
    /// Unresolved ids are still dropped as raw payloads; the store treats
    /// them as not found.
    pub fn drag<M>(
        &mut self,
        id_or_prefix: &str,
        target: ProjectStatus,
        mover: &mut M,
    ) -> DropOutcome
    where
        M: ProjectMover + ?Sized,
    {
        let card = self.find_card(id_or_prefix);
        let payload = card
            .as_ref()
            .map(ProjectCard::drag_start)
            .unwrap_or_else(|| DragPayload::plain_text(id_or_prefix));

        let Some(zone) = self.targets.iter_mut().find(|zone| zone.status() == target) else {
            return DropOutcome::Rejected;
        };
        let outcome = match zone.drag_over(&payload) {
            DragOverResponse::Accept => zone.drop_payload(&payload, mover),
            DragOverResponse::Reject => DropOutcome::Rejected,
        };
        if let Some(card) = card {
            card.drag_end();
        }
        outcome
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
