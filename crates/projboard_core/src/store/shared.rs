//! Process-wide project store access point.
//!
//! # Responsibility
//! - Lazily create exactly one store per process and hand out `&'static` access.
//! - Serialize mutations while keeping listener dispatch outside the store lock.
//! - Deliver notifications strictly in the order their mutations were applied.
//!
//! # Invariants
//! - The store is created on first use and never torn down.
//! - Snapshot and listener list are captured under the lock, so all listeners
//!   in one pass observe the same state.
//! - Notifications are queued under the store lock and drained by one
//!   dispatching thread at a time, so every listener's latest snapshot is the
//!   store's latest state once the queue is empty.
//! - A listener may call back into the store; its notification is queued and
//!   delivered after the current pass completes.
//! - Callers on other threads return only after their notification has been
//!   delivered.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use crate::store::project_store::{MoveOutcome, Notification, ProjectStore};
use log::debug;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::fmt::{Debug, Formatter};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

static PROJECT_STORE: Lazy<SharedProjectStore> = Lazy::new(|| {
    debug!("event=store_init module=store status=ok");
    SharedProjectStore::new()
});

/// Returns the process-wide project store, creating it on first call.
pub fn project_store() -> &'static SharedProjectStore {
    &PROJECT_STORE
}

#[derive(Default)]
struct DispatchQueue {
    pending: VecDeque<Notification>,
    /// Thread currently draining `pending`, if any.
    dispatcher: Option<ThreadId>,
}

/// Thread-safe handle over the single `ProjectStore`.
pub struct SharedProjectStore {
    inner: Mutex<ProjectStore>,
    queue: Mutex<DispatchQueue>,
    drained: Condvar,
}

/// Hands the dispatcher role back even if a listener panics.
struct DispatcherRelease<'a>(&'a SharedProjectStore);

impl Drop for DispatcherRelease<'_> {
    fn drop(&mut self) {
        self.0.lock_queue().dispatcher = None;
        self.0.drained.notify_all();
    }
}

impl SharedProjectStore {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(ProjectStore::new()),
            queue: Mutex::new(DispatchQueue::default()),
            drained: Condvar::new(),
        }
    }

    /// See `ProjectStore::add_project`.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let id = {
            let mut store = self.lock();
            let (id, notification) = store.insert_project(title, description, people);
            self.enqueue(notification);
            id
        };
        self.deliver_pending();
        id
    }

    /// See `ProjectStore::move_project`.
    pub fn move_project(&self, id: &str, status: ProjectStatus) -> MoveOutcome {
        let outcome = {
            let mut store = self.lock();
            let (outcome, notification) = store.apply_move(id, status);
            match notification {
                Some(notification) => self.enqueue(notification),
                None => return outcome,
            }
            outcome
        };
        self.deliver_pending();
        outcome
    }

    /// See `ProjectStore::add_listener`.
    pub fn add_listener<F>(&self, listener: F)
    where
        F: Fn(&[Project]) + Send + Sync + 'static,
    {
        self.lock().add_listener(listener);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listener_count()
    }

    // Called with the store lock held so queue order is mutation order.
    fn enqueue(&self, notification: Notification) {
        self.lock_queue().pending.push_back(notification);
    }

    fn deliver_pending(&self) {
        let current = thread::current().id();
        let mut queue = self.lock_queue();
        if queue.dispatcher == Some(current) {
            // Nested call from a listener; the outer loop delivers it.
            return;
        }
        while queue.dispatcher.is_some() {
            queue = self
                .drained
                .wait(queue)
                .unwrap_or_else(PoisonError::into_inner);
        }
        if queue.pending.is_empty() {
            return;
        }
        queue.dispatcher = Some(current);
        drop(queue);

        let _release = DispatcherRelease(self);
        loop {
            let next = self.lock_queue().pending.pop_front();
            match next {
                Some(notification) => notification.dispatch(),
                None => break,
            }
        }
    }

    // Listeners run outside this lock, so a panicking listener never poisons
    // it; the sequence behind it is always consistent.
    fn lock(&self) -> MutexGuard<'_, ProjectStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_queue(&self) -> MutexGuard<'_, DispatchQueue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Debug for SharedProjectStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedProjectStore")
            .field("inner", &*self.lock())
            .field("pending", &self.lock_queue().pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::SharedProjectStore;
    use crate::model::project::{Project, ProjectStatus};
    use std::sync::{Arc, Mutex};
    use std::thread;

    type Statuses = Arc<Mutex<Vec<ProjectStatus>>>;

    fn first_status_recorder(store: &SharedProjectStore) -> Statuses {
        let seen: Statuses = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.add_listener(move |snapshot: &[Project]| {
            if let Some(project) = snapshot.first() {
                sink.lock().expect("sink lock").push(project.status);
            }
        });
        seen
    }

    #[test]
    fn nested_mutation_is_delivered_after_current_pass() {
        let store = Arc::new(SharedProjectStore::new());

        let before = first_status_recorder(&store);
        let callback_store = Arc::clone(&store);
        store.add_listener(move |snapshot| {
            for project in snapshot {
                if project.title == "auto-finish" && project.status == ProjectStatus::Active {
                    callback_store.move_project(project.id.as_str(), ProjectStatus::Finished);
                }
            }
        });
        let after = first_status_recorder(&store);

        store.add_project("auto-finish", "finishes itself", 1);

        for seen in [&before, &after] {
            let seen = seen.lock().expect("seen lock");
            assert_eq!(*seen, [ProjectStatus::Active, ProjectStatus::Finished]);
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_mutations_leave_listeners_on_latest_state() {
        for _ in 0..50 {
            let store = SharedProjectStore::new();
            let latest: Arc<Mutex<Vec<Project>>> = Arc::new(Mutex::new(Vec::new()));
            let cache = Arc::clone(&latest);
            store.add_listener(move |snapshot| {
                *cache.lock().expect("cache lock") = snapshot.to_vec();
            });

            thread::scope(|scope| {
                for worker in 0..4 {
                    let store = &store;
                    scope.spawn(move || {
                        for i in 0..5 {
                            store.add_project(format!("w{worker}-{i}"), "concurrent add", 1);
                        }
                    });
                }
            });

            assert_eq!(store.len(), 20);
            assert_eq!(latest.lock().expect("cache lock").len(), 20);
        }
    }

    #[test]
    fn same_status_move_skips_notification() {
        let store = SharedProjectStore::new();
        let calls = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&calls);
        store.add_listener(move |_| *counter.lock().expect("counter lock") += 1);

        let id = store.add_project("Build API", "Backend service work", 3);
        store.move_project(id.as_str(), ProjectStatus::Active);

        assert_eq!(*calls.lock().expect("calls lock"), 1);
        assert_eq!(store.listener_count(), 1);
    }
}
