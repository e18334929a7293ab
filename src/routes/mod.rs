//! HTTP API endpoint handlers and router assembly.

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware;
use crate::state::AppState;

pub mod books;
pub mod health;
pub mod tasks;

/// Builds the full application router. Shared between `main` and the test
/// suite so both exercise the identical middleware stack.
///
/// The catalog surface sits behind the request gate; the task endpoint and
/// the operational probes do not. Timing is the outermost layer so
/// `X-Process-Time` covers the gate wait too.
pub fn router(state: AppState) -> Router {
    let catalog = Router::new()
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/{id}",
            get(books::get_book).put(books::update_book).delete(books::delete_book),
        )
        .layer(from_fn_with_state(state.tasks.clone(), middleware::gate::task_gate_middleware));

    Router::new()
        .merge(catalog)
        .route("/tasks/process", post(tasks::run_task))
        .route("/healthz", get(health::healthz))
        .route("/version", get(health::version))
        .route("/metrics", get(health::metrics))
        .route("/metrics/prometheus", get(health::metrics_prometheus))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(middleware::cors::cors_middleware))
        .layer(from_fn(middleware::timing::process_time_middleware))
}
