//! Database layer: pool construction, startup bootstrap, models, and
//! repositories.
//!
//! Repositories are zero-sized structs providing async CRUD methods that
//! accept `&PgPool` as the first argument; the pool is owned by the API
//! layer's shared state and passed in per request.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Create a connection pool, retrying a bounded number of times with a
/// fixed delay between attempts.
///
/// Startup-only: the database container often comes up after the server
/// process, so bootstrap waits for it. Per-request operations never retry.
pub async fn connect_with_retry(
    database_url: &str,
    max_attempts: u32,
    delay: Duration,
) -> Result<DbPool, sqlx::Error> {
    let mut attempt = 1;
    loop {
        tracing::info!(attempt, max_attempts, "Connecting to database");
        match create_pool(database_url).await {
            Ok(pool) => return Ok(pool),
            Err(err) if attempt < max_attempts => {
                tracing::warn!(attempt, error = %err, "Database not ready, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::error!(attempt, error = %err, "Giving up connecting to database");
                return Err(err);
            }
        }
    }
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `categories` and `todos` tables if they do not exist.
///
/// Replaces versioned migrations: the schema is small and stable, and every
/// statement is idempotent, so bootstrap simply runs them all at startup.
/// `todos.category_id` is a plain BIGINT on purpose — a weak reference with
/// no FK constraint and no cascade behavior.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS categories ( \
             id          BIGSERIAL PRIMARY KEY, \
             name        VARCHAR(100) NOT NULL, \
             color       TEXT NOT NULL DEFAULT '#3B82F6', \
             created_at  TIMESTAMPTZ NOT NULL DEFAULT now(), \
             CONSTRAINT uq_categories_name UNIQUE (name) \
         )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS todos ( \
             id          BIGSERIAL PRIMARY KEY, \
             title       TEXT NOT NULL, \
             description TEXT, \
             completed   BOOLEAN NOT NULL DEFAULT false, \
             priority    TEXT NOT NULL DEFAULT 'medium', \
             category_id BIGINT, \
             due_date    TIMESTAMPTZ, \
             created_at  TIMESTAMPTZ NOT NULL DEFAULT now(), \
             updated_at  TIMESTAMPTZ NOT NULL DEFAULT now() \
         )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_todos_title ON todos (title)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_todos_created_at ON todos (created_at)")
        .execute(pool)
        .await?;

    Ok(())
}
