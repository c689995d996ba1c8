use async_trait::async_trait;
use chrono::{DateTime, Utc};
use guesswin_domain::{Document, DomainError};

/// Minimal surface the sweeper needs from the backing document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Documents in `collection` whose `field` is at or before `cutoff`.
    async fn query_at_or_before(
        &self,
        collection: &str,
        field: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Document>, DomainError>;

    /// Delete `ids` from `collection` as one atomic unit.
    ///
    /// Ids that no longer exist are skipped, not reported as errors.
    /// Returns the number of documents actually removed.
    async fn batch_delete(&self, collection: &str, ids: &[String]) -> Result<u64, DomainError>;
}
