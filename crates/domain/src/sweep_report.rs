use chrono::{DateTime, Utc};
use serde::Serialize;

/// What one sweep did to one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionOutcome {
    pub collection: String,
    /// Records at or before the cutoff.
    pub scanned: u64,
    /// Old records kept by the exclusion rule.
    pub protected: u64,
    pub deleted: u64,
    pub error: Option<String>,
}

impl CollectionOutcome {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            scanned: 0,
            protected: 0,
            deleted: 0,
            error: None,
        }
    }

    pub fn failed(collection: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(collection)
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Result of one sweep cycle over every configured collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub cutoff: DateTime<Utc>,
    pub dry_run: bool,
    pub outcomes: Vec<CollectionOutcome>,
}

impl SweepReport {
    pub fn new(cutoff: DateTime<Utc>, dry_run: bool) -> Self {
        Self {
            cutoff,
            dry_run,
            outcomes: Vec::new(),
        }
    }

    pub fn total_deleted(&self) -> u64 {
        self.outcomes.iter().map(|o| o.deleted).sum()
    }

    pub fn failed_collections(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }

    pub fn outcome(&self, collection: &str) -> Option<&CollectionOutcome> {
        self.outcomes.iter().find(|o| o.collection == collection)
    }
}
