//! The request gate: catalog requests wait out an active maintenance task.
//!
//! Layered onto the catalog sub-router only. The task endpoint bypasses the
//! gate so a concurrent trigger can observe the conflict instead of queueing
//! behind the running task, and the health probes stay reachable during a
//! maintenance window.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::task::TaskGuard;

/// Suspends the request until the task guard reads `Idle`, then passes it
/// on. Gated requests are woken together when the guard clears; there is no
/// FIFO ordering between them and no upper bound on the wait.
pub async fn task_gate_middleware(
    State(guard): State<TaskGuard>,
    req: Request,
    next: Next,
) -> Response {
    if guard.is_running() {
        debug!(uri = %req.uri(), "request gated behind running task");
    }
    guard.wait_until_idle().await;
    next.run(req).await
}
