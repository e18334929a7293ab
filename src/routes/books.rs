//! CRUD handlers for the book catalog.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;

use crate::catalog::Book;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Ids are parsed by hand so a malformed one maps to the contract's
/// `{"error": "invalid id"}` body instead of axum's path rejection.
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>().map_err(|_| AppError::BadRequest("invalid id".into()))
}

fn parse_body(body: Result<Json<Book>, JsonRejection>) -> AppResult<Book> {
    let Json(book) = body.map_err(|_| AppError::BadRequest("invalid JSON".into()))?;
    Ok(book)
}

pub async fn list_books(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let books = state.catalog.read().await.list();
    Ok(Json(json!({ "data": books })))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let book = state
        .catalog
        .read()
        .await
        .get(id)
        .ok_or_else(|| AppError::NotFound("book not found".into()))?;
    Ok(Json(json!({ "data": book })))
}

pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<Book>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let book = parse_body(body)?;
    book.validate()?;
    state.catalog.write().await.create(book.clone())?;
    state.metrics.inc_books_created();

    // Simulated notification, fire and forget: the response never waits for
    // it and its outcome is unobservable to the caller.
    let metrics = state.metrics.clone();
    let delay = state.config.notifications.delay_ms;
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay)).await;
        info!(title = %book.title, "notification sent for new book");
        metrics.inc_notifications_sent();
    });

    Ok((StatusCode::CREATED, Json(json!({ "message": "book created" }))))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Book>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let book = parse_body(body)?;
    book.validate()?;
    state.catalog.write().await.update(id, book)?;
    state.metrics.inc_books_updated();
    Ok(Json(json!({ "message": "book updated" })))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    state.catalog.write().await.delete(id)?;
    state.metrics.inc_books_deleted();
    Ok(Json(json!({ "message": "book deleted" })))
}
