use axum::routing::{get, put};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes.
///
/// ```text
/// GET    /todos        -> list (filtered, paginated)
/// POST   /todos        -> create
/// GET    /todos/stats  -> stats
/// PUT    /todos/{id}   -> update
/// DELETE /todos/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/todos", get(todos::list).post(todos::create))
        .route("/todos/stats", get(todos::stats))
        .route("/todos/{id}", put(todos::update).delete(todos::delete))
}
