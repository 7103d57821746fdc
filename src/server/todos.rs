//! Todo endpoint handlers

use crate::server::{ApiError, AppState};
use crate::todo::{validate_title, TodoItem};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use metrics::increment_counter;
use serde::Deserialize;

/// Body of `POST /todos`
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Title for the new item; required and non-empty after trimming
    pub title: Option<String>,
}

/// GET /todos - list all items in insertion order
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<TodoItem>> {
    let items = state.todos.list();
    increment_counter!("triad_todos_listed_total");
    tracing::debug!(count = items.len(), "listed todos");
    Json(items)
}

/// POST /todos - create a new item
///
/// Responds 201 with the created item, or 400 when the title is
/// missing/empty or the body is malformed JSON. A failed create leaves the
/// store untouched.
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoItem>), ApiError> {
    let Json(request) = payload?;
    let title = validate_title(request.title.as_deref())?;

    let item = state.todos.append(&title);
    increment_counter!("triad_todos_created_total");
    tracing::info!(todo_id = item.id, title = %item.title, "created todo");

    Ok((StatusCode::CREATED, Json(item)))
}
