//! Handlers for the `/todos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use taskpad_core::error::CoreError;
use taskpad_core::types::DbId;
use taskpad_db::models::todo::{CreateTodo, Todo, TodoListParams, TodoStats, UpdateTodo};
use taskpad_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /todos
///
/// Filtered, paginated listing. Every supplied filter narrows the result
/// set; results are ordered `created_at DESC`.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TodoListParams>,
) -> AppResult<Json<Vec<Todo>>> {
    let todos = TodoRepo::list(&state.pool, &params).await?;
    Ok(Json(todos))
}

/// POST /todos
///
/// `title` is required; everything else defaults server-side. The stored
/// record, including generated id and timestamps, is returned.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{id}
///
/// Partial update: only fields present in the payload are applied.
/// `updated_at` refreshes on every successful call.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /todos/{id}
///
/// Permanent removal. Returns `{ "ok": true }` to match the API contract.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Todo", id }));
    }

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(json!({ "ok": true })))
}

/// GET /todos/stats
///
/// Aggregate counts over the full todo set, recomputed on every call.
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<TodoStats>> {
    let stats = TodoRepo::stats(&state.pool).await?;
    Ok(Json(stats))
}
