use crate::ports::DocumentStore;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use guesswin_domain::{
    cutoff_date, Collection, CollectionOutcome, DomainError, RetentionPolicy, SweepReport,
    RETENTION_DAYS,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{error, info, warn};

const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CYCLE_TIMEOUT_SECS: u64 = 600;

/// Use case: delete records past the retention window (one sweep cycle)
///
/// Collections are swept one after another. A failure in one collection is
/// logged and recorded in the report; the remaining collections still run.
/// Once the cycle deadline passes, the collection in flight and every
/// collection after it are reported as timed out.
pub struct SweepOldRecordsUseCase {
    store: Arc<dyn DocumentStore>,
    collections: Vec<String>,
    timezone: Tz,
    operation_timeout: Duration,
    cycle_timeout: Duration,
}

impl SweepOldRecordsUseCase {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            collections: Collection::ALL.iter().map(|c| c.name().to_string()).collect(),
            timezone: Tz::UTC,
            operation_timeout: Duration::from_secs(DEFAULT_OPERATION_TIMEOUT_SECS),
            cycle_timeout: Duration::from_secs(DEFAULT_CYCLE_TIMEOUT_SECS),
        }
    }

    pub fn with_collections(mut self, collections: Vec<String>) -> Self {
        self.collections = collections;
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    pub fn with_cycle_timeout(mut self, timeout: Duration) -> Self {
        self.cycle_timeout = timeout;
        self
    }

    pub async fn execute(&self) -> SweepReport {
        self.execute_at(Utc::now(), false).await
    }

    /// Run the query and filter steps only; nothing is deleted.
    pub async fn preview(&self) -> SweepReport {
        self.execute_at(Utc::now(), true).await
    }

    pub async fn execute_at(&self, now: DateTime<Utc>, dry_run: bool) -> SweepReport {
        let cutoff = cutoff_date(now, self.timezone, RETENTION_DAYS);
        let mut report = SweepReport::new(cutoff, dry_run);
        let deadline = Instant::now() + self.cycle_timeout;

        for name in &self.collections {
            let result = if Instant::now() >= deadline {
                Err(self.cycle_expired(name))
            } else {
                tokio::time::timeout_at(deadline, self.sweep_collection(name, cutoff, dry_run))
                    .await
                    .unwrap_or_else(|_| Err(self.cycle_expired(name)))
            };

            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(collection = %name, error = %e, "Retention sweep failed for collection");
                    CollectionOutcome::failed(name.as_str(), e.to_string())
                }
            };
            report.outcomes.push(outcome);
        }

        info!(
            total_deleted = report.total_deleted(),
            failed_collections = report.failed_collections(),
            cutoff = %report.cutoff,
            dry_run,
            "Retention sweep finished: {} documents deleted",
            report.total_deleted()
        );
        report
    }

    async fn sweep_collection(
        &self,
        name: &str,
        cutoff: DateTime<Utc>,
        dry_run: bool,
    ) -> Result<CollectionOutcome, DomainError> {
        let policy = RetentionPolicy::new(name.parse::<Collection>()?);
        let field = policy.temporal_field();

        let docs = self
            .bounded(name, self.store.query_at_or_before(name, field, cutoff))
            .await?;

        let mut outcome = CollectionOutcome::new(name);
        if docs.is_empty() {
            info!(collection = %name, "No old documents in {}", name);
            return Ok(outcome);
        }
        outcome.scanned = docs.len() as u64;

        let exclusion = policy.exclusion();
        let mut marked = Vec::with_capacity(docs.len());
        for doc in docs {
            match exclusion.protects(&doc) {
                Ok(false) => marked.push(doc.id),
                Ok(true) => outcome.protected += 1,
                Err(e) => {
                    warn!(collection = %name, id = %doc.id, error = %e, "Keeping document with unreadable status");
                    outcome.protected += 1;
                }
            }
        }

        if marked.is_empty() {
            info!(
                collection = %name,
                deleted = 0,
                protected = outcome.protected,
                "Deleted 0 documents from {}", name
            );
            return Ok(outcome);
        }

        if dry_run {
            outcome.deleted = marked.len() as u64;
            info!(
                collection = %name,
                would_delete = outcome.deleted,
                protected = outcome.protected,
                "Dry run: would delete {} documents from {}",
                outcome.deleted,
                name
            );
            return Ok(outcome);
        }

        outcome.deleted = self
            .bounded(name, self.store.batch_delete(name, &marked))
            .await?;

        info!(
            collection = %name,
            deleted = outcome.deleted,
            protected = outcome.protected,
            "Deleted {} documents from {}",
            outcome.deleted,
            name
        );
        Ok(outcome)
    }

    fn cycle_expired(&self, collection: &str) -> DomainError {
        DomainError::OperationTimeout {
            collection: collection.to_string(),
            secs: self.cycle_timeout.as_secs(),
        }
    }

    async fn bounded<T>(
        &self,
        collection: &str,
        op: impl Future<Output = Result<T, DomainError>>,
    ) -> Result<T, DomainError> {
        tokio::time::timeout(self.operation_timeout, op)
            .await
            .map_err(|_| DomainError::OperationTimeout {
                collection: collection.to_string(),
                secs: self.operation_timeout.as_secs(),
            })?
    }
}
