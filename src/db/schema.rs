//! Database schema initialization

use sqlx::SqlitePool;

use crate::error::Result;

/// Initialize the database schema
///
/// Idempotent: re-running against an existing database is a no-op.
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SCHEMA_SQL).execute(pool).await?;

    Ok(())
}

// VARCHAR(100) is declarative only; SQLite does not enforce the length.
const SCHEMA_SQL: &str = r#"
-- Documents table (one row per uploaded PDF)
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    file_name VARCHAR(100) NOT NULL,
    text_content TEXT,
    upload_date TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
