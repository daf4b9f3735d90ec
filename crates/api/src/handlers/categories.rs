//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use taskpad_db::models::category::{Category, CreateCategory};
use taskpad_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /categories
///
/// Every category, full records, storage order. No pagination.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /categories
///
/// Duplicate names violate the unique constraint and surface as 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}
