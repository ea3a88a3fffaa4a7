//! Exercises the process-wide store. Kept as a single test because the
//! store and its listeners live for the whole test binary.

use projboard_core::{project_store, DragPayload, DropTarget, MoveOutcome, ProjectStatus};
use std::ptr;
use std::sync::{Arc, Mutex};

#[test]
fn process_wide_store_is_shared_and_notifies_on_change_only() {
    assert!(ptr::eq(project_store(), project_store()));

    let calls: Arc<Mutex<Vec<(&'static str, usize)>>> = Arc::new(Mutex::new(Vec::new()));
    for name in ["first", "second"] {
        let calls = Arc::clone(&calls);
        project_store().add_listener(move |snapshot| {
            calls.lock().unwrap().push((name, snapshot.len()));
        });
    }
    assert_eq!(project_store().listener_count(), 2);

    let id = project_store().add_project("Build API", "Backend service work", 3);
    assert_eq!(
        *calls.lock().unwrap(),
        vec![("first", 1), ("second", 1)]
    );

    let mut store = project_store();
    let mut active = DropTarget::new(ProjectStatus::Active);
    active.drop_payload(&DragPayload::plain_text(id.as_str()), &mut store);
    assert_eq!(calls.lock().unwrap().len(), 2);

    assert_eq!(
        project_store().move_project(id.as_str(), ProjectStatus::Finished),
        MoveOutcome::Moved {
            from: ProjectStatus::Active,
            to: ProjectStatus::Finished,
        }
    );
    assert_eq!(calls.lock().unwrap().len(), 4);
    assert_eq!(project_store().len(), 1);
}
