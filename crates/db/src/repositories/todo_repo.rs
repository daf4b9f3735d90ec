//! Repository for the `todos` table.
//!
//! Filtered listing assembles its WHERE clause from the provided params
//! only; statistics re-aggregate the full table on every call. The stats
//! sub-queries are separate statements with no shared transaction, so a
//! concurrent write may land between them — acceptable for this domain.

use std::collections::BTreeMap;

use sqlx::PgPool;
use taskpad_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, TodoListParams, TodoStats, UpdateTodo};

/// Column list for `todos` queries.
const COLUMNS: &str = "\
    id, title, description, completed, priority, \
    category_id, due_date, created_at, updated_at";

/// Default page size for todo listing. No maximum is enforced.
const DEFAULT_LIMIT: i64 = 100;

/// Priority applied when a todo is created without one.
const DEFAULT_PRIORITY: &str = "medium";

/// Provides CRUD and aggregation operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// List todos matching the given filters, newest first.
    ///
    /// Filters are conjunctive exact-match conditions; pagination is
    /// offset-based via `skip` / `limit`.
    pub async fn list(pool: &PgPool, params: &TodoListParams) -> Result<Vec<Todo>, sqlx::Error> {
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).max(0);
        let skip = params.skip.unwrap_or(0).max(0);

        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if params.completed.is_some() {
            conditions.push(format!("completed = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.priority.is_some() {
            conditions.push(format!("priority = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.category_id.is_some() {
            conditions.push(format!("category_id = ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM todos \
             {where_clause} \
             ORDER BY created_at DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1,
        );

        let mut q = sqlx::query_as::<_, Todo>(&query);

        if let Some(completed) = params.completed {
            q = q.bind(completed);
        }
        if let Some(priority) = &params.priority {
            q = q.bind(priority);
        }
        if let Some(category_id) = params.category_id {
            q = q.bind(category_id);
        }

        q = q.bind(limit).bind(skip);

        q.fetch_all(pool).await
    }

    /// Insert a new todo. `created_at` and `updated_at` are set by the
    /// database to the same instant. `category_id` is stored as given; no
    /// existence check is performed.
    pub async fn create(pool: &PgPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, priority, category_id, due_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(input.description.as_deref())
            .bind(input.priority.as_deref().unwrap_or(DEFAULT_PRIORITY))
            .bind(input.category_id)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = $1");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update to a todo.
    ///
    /// Fetches the current row, overlays only the fields present in
    /// `input`, and writes the full row back with `updated_at = now()`.
    /// The timestamp refreshes on every successful update, even when no
    /// field value actually changed.
    ///
    /// Returns `None` if no todo with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let Some(mut todo) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        if let Some(title) = &input.title {
            todo.title = title.clone();
        }
        if let Some(description) = &input.description {
            todo.description = description.clone();
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }
        if let Some(priority) = &input.priority {
            todo.priority = priority.clone();
        }
        if let Some(category_id) = input.category_id {
            todo.category_id = category_id;
        }
        if let Some(due_date) = input.due_date {
            todo.due_date = due_date;
        }

        let query = format!(
            "UPDATE todos SET \
                 title = $2, \
                 description = $3, \
                 completed = $4, \
                 priority = $5, \
                 category_id = $6, \
                 due_date = $7, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .bind(&todo.title)
            .bind(todo.description.as_deref())
            .bind(todo.completed)
            .bind(&todo.priority)
            .bind(todo.category_id)
            .bind(todo.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate counts over the full todo set.
    ///
    /// Four statements mirroring the listing contract: two scalar counts
    /// and two GROUP BYs. `pending` is derived from `total - completed`
    /// rather than queried independently.
    pub async fn stats(pool: &PgPool) -> Result<TodoStats, sqlx::Error> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
            .fetch_one(pool)
            .await?;

        let completed: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM todos WHERE completed = true")
                .fetch_one(pool)
                .await?;

        let priority_rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT priority, COUNT(*) FROM todos GROUP BY priority")
                .fetch_all(pool)
                .await?;
        let by_priority: BTreeMap<String, i64> = priority_rows.into_iter().collect();

        let category_rows: Vec<(Option<DbId>, i64)> =
            sqlx::query_as("SELECT category_id, COUNT(*) FROM todos GROUP BY category_id")
                .fetch_all(pool)
                .await?;
        let by_category: BTreeMap<String, i64> = category_rows
            .into_iter()
            .map(|(category_id, count)| (category_key(category_id), count))
            .collect();

        Ok(TodoStats {
            total,
            completed,
            pending: total - completed,
            by_priority,
            by_category,
        })
    }
}

/// Map a grouped `category_id` to its stats key: the stringified id, or
/// the literal `"None"` for todos with no category. An id of 0 is a real
/// id and keys as `"0"`.
fn category_key(category_id: Option<DbId>) -> String {
    match category_id {
        Some(id) => id.to_string(),
        None => "None".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_key_stringifies_ids_and_maps_null_to_none() {
        assert_eq!(category_key(Some(7)), "7");
        assert_eq!(category_key(Some(0)), "0");
        assert_eq!(category_key(None), "None");
    }
}
