use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use guesswin_application::ports::DocumentStore;
use guesswin_domain::{Document, DomainError};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

/// Document store on a single SQLite table keyed by `(collection, id)`.
///
/// Temporal fields are compared through `julianday()`, so any ISO-8601
/// string with or without an offset orders correctly. Documents whose field
/// is missing or not a date never match a cutoff query.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[instrument(skip(self, doc), fields(id = %doc.id))]
    pub async fn upsert(&self, collection: &str, doc: &Document) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO documents (collection, id, data)
             VALUES (?, ?, ?)
             ON CONFLICT(collection, id) DO UPDATE SET
                 data = excluded.data,
                 updated_at = CURRENT_TIMESTAMP",
        )
        .bind(collection)
        .bind(&doc.id)
        .bind(doc.data.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to upsert document");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, DomainError> {
        let row = sqlx::query_as::<_, (String, String)>(
            "SELECT id, data FROM documents WHERE collection = ? AND id = ?",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch document");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(|row| Self::row_to_document(collection, row))
            .transpose()
    }

    #[instrument(skip(self))]
    pub async fn count(&self, collection: &str) -> Result<u64, DomainError> {
        let (count,) =
            sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM documents WHERE collection = ?")
                .bind(collection)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to count documents");
                    DomainError::DatabaseError(e.to_string())
                })?;

        Ok(count as u64)
    }

    fn row_to_document(collection: &str, row: (String, String)) -> Result<Document, DomainError> {
        let (id, data) = row;
        let value = serde_json::from_str(&data).map_err(|e| DomainError::InvalidDocument {
            collection: collection.to_string(),
            id: id.clone(),
            reason: e.to_string(),
        })?;
        Ok(Document::new(id, value))
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    #[instrument(skip(self))]
    async fn query_at_or_before(
        &self,
        collection: &str,
        field: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Document>, DomainError> {
        let rows = sqlx::query_as::<_, (String, String)>(
            "SELECT id, data FROM documents
             WHERE collection = ?
               AND julianday(json_extract(data, ?)) <= julianday(?)
             ORDER BY id",
        )
        .bind(collection)
        .bind(format!("$.{}", field))
        .bind(cutoff.to_rfc3339_opts(SecondsFormat::Millis, true))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query old documents");
            DomainError::QueryFailed {
                collection: collection.to_string(),
                reason: e.to_string(),
            }
        })?;

        debug!(found = rows.len(), "Old documents fetched");
        rows.into_iter()
            .map(|row| Self::row_to_document(collection, row))
            .collect()
    }

    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn batch_delete(&self, collection: &str, ids: &[String]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let batch_error = |e: sqlx::Error| DomainError::BatchDeleteFailed {
            collection: collection.to_string(),
            reason: e.to_string(),
        };

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction for batch delete");
            batch_error(e)
        })?;

        let mut deleted = 0u64;
        for id in ids {
            let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
                .bind(collection)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!(error = %e, id = %id, "Failed to delete document");
                    batch_error(e)
                })?;
            deleted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit batch delete transaction");
            batch_error(e)
        })?;

        Ok(deleted)
    }
}
