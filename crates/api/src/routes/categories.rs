use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET  /categories  -> list
/// POST /categories  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/categories", get(categories::list).post(categories::create))
}
