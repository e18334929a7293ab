//! The exclusive maintenance task endpoint.

use std::time::Duration;

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use tracing::info;

use crate::error::AppResult;
use crate::state::AppState;

/// Runs the simulated heavy task while holding the exclusive permit. A
/// trigger that arrives while another task is running gets an immediate
/// 409; it neither queues nor touches the running task's timer. The permit
/// is released on drop, so the guard clears even if this handler is
/// cancelled mid-sleep.
pub async fn run_task(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let permit = match state.tasks.try_begin() {
        Ok(permit) => permit,
        Err(conflict) => {
            state.metrics.inc_tasks_rejected();
            return Err(conflict.into());
        }
    };

    info!("task started");
    // Simulated heavy update; a real system would do actual I/O here.
    tokio::time::sleep(Duration::from_millis(state.config.task.duration_ms)).await;
    info!("task finished");
    drop(permit);

    state.metrics.inc_tasks_completed();
    Ok(Json(json!({ "message": "Task completed successfully" })))
}
