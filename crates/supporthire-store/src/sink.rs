//! SQLite-backed submission sink.
//!
//! Every write appends one row to `submission_documents`. The row holds the
//! document as JSON text plus the kind and collection it was filed under, so
//! counts can be taken without decoding documents. The creation timestamp
//! comes from the database clock; a `createdAt` sent by the caller is
//! discarded.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sqlx::sqlite::SqlitePool;
use supporthire_forms::{
    stamp_created_at, BoxFuture, Document, SinkError, SubmissionKind, SubmissionRecord,
    SubmissionSink, CREATED_AT_KEY,
};
use tracing::{debug, info};

use crate::error::{Result, StoreError};

/// SQL to create the submissions table (SQLite).
pub const CREATE_SUBMISSIONS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS submission_documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    collection TEXT NOT NULL,
    kind TEXT NOT NULL,
    document TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
)
"#;

/// A submission read back from the store.
#[derive(Debug, Clone, Serialize)]
pub struct StoredSubmission {
    /// Unique ID in the submissions table.
    pub id: i64,
    /// Collection the document was written to.
    pub collection: String,
    /// The decoded record, with `created_at` taken from the row.
    pub record: SubmissionRecord,
    /// The raw document, with `createdAt` taken from the row.
    pub document: Document,
}

impl StoredSubmission {
    /// Returns which form the submission came from.
    pub fn kind(&self) -> SubmissionKind {
        self.record.kind()
    }

    /// Returns when the database stored the row.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.record.created_at
    }
}

/// Append-only submission store on a SQLite pool.
#[derive(Debug, Clone)]
pub struct SqliteSubmissionSink {
    pool: SqlitePool,
}

impl SqliteSubmissionSink {
    /// Creates a sink on an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Ensures the submissions table exists.
    pub async fn ensure_table(&self) -> Result<()> {
        sqlx::query(CREATE_SUBMISSIONS_TABLE_SQL)
            .execute(&self.pool)
            .await?;
        info!("submission table ready");
        Ok(())
    }

    /// Appends a document and returns its row ID.
    ///
    /// The document must decode as a submission record.
    pub async fn insert(&self, collection: &str, mut document: Document) -> Result<i64> {
        document.remove(CREATED_AT_KEY);
        let record = SubmissionRecord::from_document(document.clone())
            .map_err(|err| StoreError::InvalidDocument(err.to_string()))?;
        let kind = record.kind();
        let body = serde_json::to_string(&document)?;

        let result = sqlx::query(
            "INSERT INTO submission_documents (collection, kind, document) VALUES (?, ?, ?)",
        )
        .bind(collection)
        .bind(kind.as_str())
        .bind(body)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, collection, kind = kind.as_str(), "stored submission");
        Ok(id)
    }

    /// Counts the documents in a collection.
    pub async fn count(&self, collection: &str) -> Result<i64> {
        let row: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM submission_documents WHERE collection = ?")
                .bind(collection)
                .fetch_one(&self.pool)
                .await?;
        Ok(row.0)
    }

    /// Counts the documents of one kind in a collection.
    pub async fn count_by_kind(&self, collection: &str, kind: SubmissionKind) -> Result<i64> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM submission_documents WHERE collection = ? AND kind = ?",
        )
        .bind(collection)
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await?;
        Ok(row.0)
    }

    /// Lists the documents of a collection in insertion order.
    pub async fn list(&self, collection: &str) -> Result<Vec<StoredSubmission>> {
        let rows: Vec<(i64, String, String, String)> = sqlx::query_as(
            "SELECT id, collection, document, created_at FROM submission_documents \
             WHERE collection = ? ORDER BY id",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(id, collection, body, created_at)| -> Result<StoredSubmission> {
                let mut document = match serde_json::from_str::<Value>(&body)? {
                    Value::Object(document) => document,
                    _ => {
                        return Err(StoreError::InvalidDocument(format!(
                            "row {id} is not a JSON object"
                        )))
                    }
                };
                stamp_created_at(&mut document, parse_timestamp(&created_at)?);
                let record = SubmissionRecord::from_document(document.clone())
                    .map_err(|err| StoreError::InvalidDocument(format!("row {id}: {err}")))?;
                Ok(StoredSubmission {
                    id,
                    collection,
                    record,
                    document,
                })
            })
            .collect()
    }
}

/// Parses a `created_at` column written either by SQLite or as RFC 3339.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
                .map(|dt| dt.and_utc())
        })
        .map_err(|err| StoreError::InvalidDocument(format!("bad timestamp {value:?}: {err}")))
}

impl SubmissionSink for SqliteSubmissionSink {
    fn write<'a>(
        &'a self,
        collection: &'a str,
        document: Document,
    ) -> BoxFuture<'a, std::result::Result<(), SinkError>> {
        Box::pin(async move {
            self.insert(collection, document)
                .await
                .map(|_| ())
                .map_err(SinkError::from)
        })
    }
}
