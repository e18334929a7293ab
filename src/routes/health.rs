use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

// Health check endpoint - lightweight, not gated behind the task guard
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Metrics endpoint: returns JSON snapshot
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.get_snapshot();
    Json(snapshot)
}

// Prometheus-compatible text exposition format
pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP buchregal_books_created Total books created\n# TYPE buchregal_books_created counter\nbuchregal_books_created {}\n\
# HELP buchregal_books_updated Total books updated\n# TYPE buchregal_books_updated counter\nbuchregal_books_updated {}\n\
# HELP buchregal_books_deleted Total books deleted\n# TYPE buchregal_books_deleted counter\nbuchregal_books_deleted {}\n\
# HELP buchregal_tasks_completed Maintenance tasks completed\n# TYPE buchregal_tasks_completed counter\nbuchregal_tasks_completed {}\n\
# HELP buchregal_tasks_rejected Maintenance task triggers rejected\n# TYPE buchregal_tasks_rejected counter\nbuchregal_tasks_rejected {}\n\
# HELP buchregal_notifications_sent Notifications sent\n# TYPE buchregal_notifications_sent counter\nbuchregal_notifications_sent {}\n\
# HELP buchregal_uptime_seconds Uptime seconds\n# TYPE buchregal_uptime_seconds gauge\nbuchregal_uptime_seconds {}\n",
        m.books_created,
        m.books_updated,
        m.books_deleted,
        m.tasks_completed,
        m.tasks_rejected,
        m.notifications_sent,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
