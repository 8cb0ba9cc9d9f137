//! Schema definitions and migration utilities.
//!
//! The schema is applied once at startup. Every statement is
//! `CREATE ... IF NOT EXISTS`, so re-running is harmless.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Name of the page table.
pub const PAGES_TABLE: &str = "wiki_pages";

/// Embedded migration SQL for the page table (001_pages.sql).
pub const PAGES_MIGRATION: &str = include_str!("../../../migrations/001_pages.sql");

/// Run all migrations against the database.
///
/// # Errors
///
/// Returns [`StoreError::MigrationError`] if a migration fails to execute.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    tracing::debug!("Running pages migration (001_pages.sql)...");
    sqlx::raw_sql(PAGES_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::MigrationError(format!("Pages migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the page table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = current_schema()
            AND table_name = $1
        )
        "#,
    )
    .bind(PAGES_TABLE)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}
