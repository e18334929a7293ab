//! The Idle/Running guard for the exclusive maintenance task.
//!
//! The guard is the only coordination point between the task endpoint and
//! ordinary request handling: while a task holds the permit, the request
//! gate ([`crate::middleware::gate`]) suspends every catalog request until
//! the guard reads `Idle` again. A second trigger while running is rejected
//! immediately, never queued.
//!
//! Waiters are woken through a `Notify` rather than the original fixed
//! 200ms poll loop; resumption after guard-clear is a single scheduler
//! wakeup. There is no timeout and no cancellation: a gated request waits
//! as long as the task runs.

use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::Notify;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Idle,
    Running,
}

/// Returned when a task is triggered while another one holds the permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("task already running")]
pub struct TaskConflict;

struct GuardInner {
    state: Mutex<TaskState>,
    idle: Notify,
}

/// Shared handle to the task state machine. Cheap to clone; all clones
/// observe the same state.
#[derive(Clone)]
pub struct TaskGuard {
    inner: Arc<GuardInner>,
}

impl TaskGuard {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(GuardInner {
                state: Mutex::new(TaskState::Idle),
                idle: Notify::new(),
            }),
        }
    }

    /// Attempts the `Idle -> Running` transition. Check and set happen in
    /// one critical section, so exactly one of any number of concurrent
    /// callers obtains the permit; the rest get [`TaskConflict`] right away.
    pub fn try_begin(&self) -> Result<TaskPermit, TaskConflict> {
        let mut state = self.inner.state.lock().unwrap();
        if *state == TaskState::Running {
            return Err(TaskConflict);
        }
        *state = TaskState::Running;
        Ok(TaskPermit { guard: self.clone() })
    }

    pub fn is_running(&self) -> bool {
        *self.inner.state.lock().unwrap() == TaskState::Running
    }

    /// Suspends until the guard reads `Idle`. Returns immediately when no
    /// task is running.
    pub async fn wait_until_idle(&self) {
        loop {
            // Register interest before the state check so a release between
            // check and await cannot be missed.
            let notified = self.inner.idle.notified();
            if !self.is_running() {
                return;
            }
            notified.await;
        }
    }

    fn release(&self) {
        *self.inner.state.lock().unwrap() = TaskState::Idle;
        self.inner.idle.notify_waiters();
    }
}

impl Default for TaskGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII witness of the `Running` state. Dropping it performs the
/// unconditional `Running -> Idle` transition and wakes all gated waiters,
/// whether the task finished or its handler was cancelled mid-flight.
pub struct TaskPermit {
    guard: TaskGuard,
}

impl Drop for TaskPermit {
    fn drop(&mut self) {
        self.guard.release();
    }
}
