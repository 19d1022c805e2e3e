//! Documents database operations

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::Result;

/// Document record: one stored row per uploaded PDF
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Document {
    pub id: i64,
    pub file_name: String,
    pub text_content: Option<String>,
    pub upload_date: String,
}

/// Document repository
///
/// Documents are create-only: the service never updates or deletes rows.
pub struct DocumentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new document and return the stored row.
    ///
    /// The id and upload timestamp are assigned by the database. There is no
    /// uniqueness constraint on `file_name`: inserting the same name twice
    /// creates two independent rows.
    pub async fn create(&self, file_name: &str, text_content: &str) -> Result<Document> {
        let document = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (file_name, text_content)
            VALUES (?, ?)
            RETURNING id, file_name, text_content, upload_date
            "#,
        )
        .bind(file_name)
        .bind(text_content)
        .fetch_one(self.pool)
        .await?;

        Ok(document)
    }

    /// Find documents whose text contains `query` as a case-insensitive
    /// substring, in insertion order, sliced by `offset` then `limit`.
    ///
    /// SQLite's LIKE is case-insensitive for ASCII. The query string is not
    /// escaped, so `%` and `_` keep their wildcard meaning.
    pub async fn find_by_substring(
        &self,
        query: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Document>> {
        let documents = sqlx::query_as::<_, Document>(
            r#"
            SELECT id, file_name, text_content, upload_date
            FROM documents
            WHERE text_content LIKE '%' || ? || '%'
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(query)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool)
        .await?;

        Ok(documents)
    }
}
