//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose project creation, drag-drop and snapshot reads to Dart via FRB.
//! - Keep error semantics simple: response envelopes, never panics.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Project data is read only from snapshots delivered to this crate's listener.
//! - Drop-zone visual state lives here, one zone per project status.

use log::warn;
use projboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    project_store, DragOverResponse, DragPayload, DropEffect, DropOutcome, DropTarget,
    MoveOutcome, PayloadKind, Project, ProjectCard, ProjectDraft, ProjectStatus,
};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static LATEST_SNAPSHOT: OnceLock<Mutex<Vec<Project>>> = OnceLock::new();
static DROP_ZONES: OnceLock<Mutex<Vec<DropTarget>>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Project row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub people: u32,
    /// `active|finished`.
    pub status: String,
    /// Display text such as `3 persons`.
    pub people_label: String,
}

/// Drag payload handed to the platform drag API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayloadDto {
    /// MIME-style payload kind, `text/plain` for project cards.
    pub kind: String,
    pub data: String,
    /// Always `move` for project cards.
    pub effect_allowed: String,
}

/// Drop-zone feedback for drag-over/leave events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropZoneResponse {
    /// Whether the platform's default rejection should be suppressed.
    pub accepted: bool,
    /// CSS-like class for the list, `droppable` or empty.
    pub css_class: String,
    pub message: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectActionResponse {
    pub ok: bool,
    /// Affected project ID, when one applies.
    pub project_id: Option<String>,
    /// Whether the store state visibly changed.
    pub changed: bool,
    pub message: String,
}

impl ProjectActionResponse {
    fn success(message: impl Into<String>, project_id: String, changed: bool) -> Self {
        Self {
            ok: true,
            project_id: Some(project_id),
            changed,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            project_id: None,
            changed: false,
            message: message.into(),
        }
    }
}

/// Validates form input and creates an active project.
///
/// # FFI contract
/// - `people` is raw field text; it must parse as a whole number >= 1.
/// - Invalid input never reaches the store.
#[flutter_rust_bridge::frb(sync)]
pub fn project_create(title: String, description: String, people: String) -> ProjectActionResponse {
    ensure_snapshot_listener();
    match ProjectDraft::gather(&title, &description, &people) {
        Ok(draft) => {
            let id = project_store().add_project(draft.title, draft.description, draft.people);
            ProjectActionResponse::success("Project created.", id.into_string(), true)
        }
        Err(err) => ProjectActionResponse::failure(format!("project_create failed: {err}")),
    }
}

/// Starts dragging the card for `project_id`.
#[flutter_rust_bridge::frb(sync)]
pub fn project_drag_start(project_id: String) -> DragPayloadDto {
    ensure_snapshot_listener();
    let payload = lock(snapshot_cache())
        .iter()
        .find(|project| project.id.as_str() == project_id)
        .cloned()
        .map(|project| ProjectCard::new(project).drag_start())
        .unwrap_or_else(|| DragPayload::plain_text(project_id));
    to_payload_dto(&payload)
}

/// Reports a drag hovering over the list for `target_status`.
#[flutter_rust_bridge::frb(sync)]
pub fn drop_zone_drag_over(target_status: String, payload_kind: String) -> DropZoneResponse {
    let payload = DragPayload::new(PayloadKind::from_mime(&payload_kind), "", DropEffect::Move);
    with_drop_zone(&target_status, |zone| {
        let accepted = zone.drag_over(&payload) == DragOverResponse::Accept;
        DropZoneResponse {
            accepted,
            css_class: zone.css_class().to_string(),
            message: String::new(),
        }
    })
    .unwrap_or_else(|message| DropZoneResponse {
        accepted: false,
        css_class: String::new(),
        message,
    })
}

/// Reports a drag leaving the list for `target_status` without dropping.
#[flutter_rust_bridge::frb(sync)]
pub fn drop_zone_drag_leave(target_status: String) -> DropZoneResponse {
    with_drop_zone(&target_status, |zone| {
        zone.drag_leave();
        DropZoneResponse {
            accepted: false,
            css_class: zone.css_class().to_string(),
            message: String::new(),
        }
    })
    .unwrap_or_else(|message| DropZoneResponse {
        accepted: false,
        css_class: String::new(),
        message,
    })
}

/// Drops a payload onto the list for `target_status`.
///
/// # FFI contract
/// - Unknown project ids and same-list drops succeed with `changed = false`.
/// - Non plain-text payloads and unknown statuses return `ok = false`.
#[flutter_rust_bridge::frb(sync)]
pub fn project_drop(
    target_status: String,
    payload_kind: String,
    data: String,
) -> ProjectActionResponse {
    ensure_snapshot_listener();
    let payload = DragPayload::new(PayloadKind::from_mime(&payload_kind), data, DropEffect::Move);
    let mut store = project_store();
    let outcome =
        match with_drop_zone(&target_status, |zone| zone.drop_payload(&payload, &mut store)) {
            Ok(outcome) => outcome,
            Err(message) => return ProjectActionResponse::failure(message),
        };

    match outcome {
        DropOutcome::Applied(MoveOutcome::Moved { to, .. }) => ProjectActionResponse::success(
            format!("Project moved to {to}."),
            payload.data,
            true,
        ),
        DropOutcome::Applied(MoveOutcome::Unchanged) => ProjectActionResponse::success(
            "Project already in this list.",
            payload.data,
            false,
        ),
        DropOutcome::Applied(MoveOutcome::NotFound) => {
            ProjectActionResponse::success("Project not found.", payload.data, false)
        }
        DropOutcome::Rejected => ProjectActionResponse::failure(format!(
            "project_drop ignored payload kind `{}`",
            payload.kind.as_mime()
        )),
    }
}

/// Returns the latest delivered snapshot, optionally filtered by status.
#[flutter_rust_bridge::frb(sync)]
pub fn project_snapshot(status: Option<String>) -> Vec<ProjectItem> {
    ensure_snapshot_listener();
    let filter = match status.as_deref().map(ProjectStatus::parse) {
        Some(Ok(status)) => Some(status),
        Some(Err(err)) => {
            warn!("event=project_snapshot module=ffi status=error error={err}");
            return Vec::new();
        }
        None => None,
    };
    lock(snapshot_cache())
        .iter()
        .filter(|project| filter.map_or(true, |status| project.status == status))
        .cloned()
        .map(to_project_item)
        .collect()
}

fn ensure_snapshot_listener() {
    let _ = snapshot_cache();
}

fn snapshot_cache() -> &'static Mutex<Vec<Project>> {
    LATEST_SNAPSHOT.get_or_init(|| {
        project_store().add_listener(|snapshot| {
            if let Some(cache) = LATEST_SNAPSHOT.get() {
                *lock(cache) = snapshot.to_vec();
            }
        });
        Mutex::new(Vec::new())
    })
}

fn with_drop_zone<T>(
    target_status: &str,
    f: impl FnOnce(&mut DropTarget) -> T,
) -> Result<T, String> {
    let status = ProjectStatus::parse(target_status).map_err(|err| err.to_string())?;
    let zones = DROP_ZONES.get_or_init(|| {
        Mutex::new(ProjectStatus::ALL.into_iter().map(DropTarget::new).collect())
    });
    let mut zones = lock(zones);
    let zone = zones
        .iter_mut()
        .find(|zone| zone.status() == status)
        .ok_or_else(|| format!("no drop zone for status `{status}`"))?;
    Ok(f(zone))
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn to_payload_dto(payload: &DragPayload) -> DragPayloadDto {
    DragPayloadDto {
        kind: payload.kind.as_mime().to_string(),
        data: payload.data.clone(),
        effect_allowed: payload.effect_allowed.as_str().to_string(),
    }
}

fn to_project_item(project: Project) -> ProjectItem {
    let people_label = ProjectCard::new(project.clone()).people_label();
    ProjectItem {
        id: project.id.into_string(),
        title: project.title,
        description: project.description,
        people: project.people,
        status: project.status.as_str().to_string(),
        people_label,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, drop_zone_drag_leave, drop_zone_drag_over, init_logging, ping,
        project_create, project_drag_start, project_drop, project_snapshot,
    };
    use std::thread;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn project_create_rejects_invalid_input() {
        let response = project_create(
            "Build API".to_string(),
            "work".to_string(),
            "3".to_string(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("description"));
    }

    #[test]
    fn created_project_appears_in_active_snapshot() {
        let title = unique_token("ffi-create");
        let response = project_create(
            title.clone(),
            "Backend service work".to_string(),
            "1".to_string(),
        );
        assert!(response.ok, "{}", response.message);
        let id = response.project_id.expect("created project id");

        let active = project_snapshot(Some("active".to_string()));
        let item = active
            .iter()
            .find(|item| item.id == id)
            .expect("new project should be listed as active");
        assert_eq!(item.title, title);
        assert_eq!(item.people_label, "1 person");
    }

    #[test]
    fn drag_and_drop_moves_project_between_lists() {
        let response = project_create(
            unique_token("ffi-drag"),
            "Backend service work".to_string(),
            "3".to_string(),
        );
        let id = response.project_id.expect("created project id");

        let payload = project_drag_start(id.clone());
        assert_eq!(payload.kind, "text/plain");
        assert_eq!(payload.data, id);
        assert_eq!(payload.effect_allowed, "move");

        let over = drop_zone_drag_over("finished".to_string(), payload.kind.clone());
        assert!(over.accepted);
        assert_eq!(over.css_class, "droppable");

        let dropped = project_drop(
            "finished".to_string(),
            payload.kind.clone(),
            payload.data.clone(),
        );
        assert!(dropped.ok, "{}", dropped.message);
        assert!(dropped.changed);
        assert!(project_snapshot(Some("finished".to_string()))
            .iter()
            .any(|item| item.id == id));

        let repeat = project_drop("finished".to_string(), payload.kind, payload.data);
        assert!(repeat.ok);
        assert!(!repeat.changed);
    }

    #[test]
    fn snapshot_reflects_creates_from_many_threads() {
        let ids: Vec<String> = thread::scope(|scope| {
            let workers: Vec<_> = (0..4)
                .map(|worker| {
                    scope.spawn(move || {
                        (0..10)
                            .map(|i| {
                                let response = project_create(
                                    unique_token(&format!("ffi-thread-{worker}-{i}")),
                                    "Concurrent creation".to_string(),
                                    "2".to_string(),
                                );
                                assert!(response.ok, "{}", response.message);
                                response.project_id.expect("created project id")
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            workers
                .into_iter()
                .flat_map(|worker| worker.join().expect("worker thread"))
                .collect()
        });

        let snapshot = project_snapshot(None);
        for id in &ids {
            assert!(
                snapshot.iter().any(|item| &item.id == id),
                "snapshot is missing {id}"
            );
        }
    }

    #[test]
    fn foreign_payloads_and_unknown_statuses_are_refused() {
        let over = drop_zone_drag_over("active".to_string(), "text/html".to_string());
        assert!(!over.accepted);

        let leave = drop_zone_drag_leave("archived".to_string());
        assert!(leave.message.contains("archived"));

        let dropped = project_drop(
            "active".to_string(),
            "text/uri-list".to_string(),
            "whatever".to_string(),
        );
        assert!(!dropped.ok);

        assert!(project_snapshot(Some("archived".to_string())).is_empty());
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }
}
