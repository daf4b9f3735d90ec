//! Todo entity model and DTOs.
//!
//! The update DTO distinguishes three states for nullable columns: key
//! absent (leave untouched), key present with `null` (clear the column),
//! and key present with a value (overwrite). Plain `Option<T>` collapses
//! the first two, so nullable fields use `Option<Option<T>>` with a
//! `deserialize_with` shim that marks any present key as `Some`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use taskpad_core::types::{DbId, Timestamp};

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    /// Free text by convention: `"low" | "medium" | "high"`. Not enforced.
    pub priority: String,
    /// Weak reference to `categories.id`; existence is not checked.
    pub category_id: Option<DbId>,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new todo. Only `title` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `"medium"` if omitted.
    pub priority: Option<String>,
    pub category_id: Option<DbId>,
    pub due_date: Option<Timestamp>,
}

/// DTO for partially updating a todo. Only fields present in the payload
/// are applied; for nullable columns an explicit `null` clears the value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub category_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "present")]
    pub due_date: Option<Option<Timestamp>>,
}

/// Wrap a deserialized value in `Some` so a present-but-null key becomes
/// `Some(None)` while an absent key stays `None` via `#[serde(default)]`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Query parameters for `GET /todos`.
///
/// Each provided filter narrows the result set by exact-match equality;
/// omitted filters impose no constraint. `category_id=0` is a real filter
/// here (the presence of the key decides, not truthiness).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoListParams {
    /// Rows to skip. Defaults to 0.
    pub skip: Option<i64>,
    /// Maximum rows to return. Defaults to 100; no upper bound is enforced.
    pub limit: Option<i64>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
    pub category_id: Option<DbId>,
}

/// Aggregate counts over the full todo set.
///
/// Map keys in `by_category` are stringified category ids; todos with no
/// category group under the literal key `"None"`.
#[derive(Debug, Clone, Serialize)]
pub struct TodoStats {
    pub total: i64,
    pub completed: i64,
    /// Derived: `total - completed`.
    pub pending: i64,
    pub by_priority: BTreeMap<String, i64>,
    pub by_category: BTreeMap<String, i64>,
}
