#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use guesswin_application::ports::DocumentStore;
use guesswin_domain::{Document, DomainError};
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MockDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    failing_queries: Arc<RwLock<HashSet<String>>>,
    failing_deletes: Arc<RwLock<HashSet<String>>>,
    query_delay: Arc<RwLock<Option<std::time::Duration>>>,
    slow_collections: Arc<RwLock<HashMap<String, std::time::Duration>>>,
    cutoffs: Arc<RwLock<Vec<DateTime<Utc>>>>,
    query_calls: Arc<AtomicU64>,
    delete_calls: Arc<AtomicU64>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
            failing_queries: Arc::new(RwLock::new(HashSet::new())),
            failing_deletes: Arc::new(RwLock::new(HashSet::new())),
            query_delay: Arc::new(RwLock::new(None)),
            slow_collections: Arc::new(RwLock::new(HashMap::new())),
            cutoffs: Arc::new(RwLock::new(Vec::new())),
            query_calls: Arc::new(AtomicU64::new(0)),
            delete_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn insert(&self, collection: &str, doc: Document) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(doc);
    }

    pub async fn add_bet(&self, id: &str, days_old: i64) {
        self.insert(
            "bets",
            Document::new(id, json!({ "userId": "u1", "matchId": "m1", "amount": 50.0, "timestamp": ts(days_old) })),
        )
        .await;
    }

    pub async fn add_deposit(&self, id: &str, status: &str, days_old: i64) {
        self.insert(
            "deposits",
            Document::new(id, json!({ "userId": "u1", "amount": 500.0, "status": status, "createdAt": ts(days_old) })),
        )
        .await;
    }

    pub async fn add_withdrawal(&self, id: &str, status: &str, days_old: i64) {
        self.insert(
            "withdrawals",
            Document::new(id, json!({ "userId": "u1", "amount": 200.0, "upiId": "u1@upi", "status": status, "createdAt": ts(days_old) })),
        )
        .await;
    }

    pub async fn add_match(&self, id: &str, status: &str, days_old: i64) {
        self.insert(
            "matches",
            Document::new(id, json!({ "teamA": "A", "teamB": "B", "status": status, "startTime": ts(days_old) })),
        )
        .await;
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
    }

    pub async fn contains(&self, collection: &str, id: &str) -> bool {
        self.collections
            .read()
            .await
            .get(collection)
            .map(|docs| docs.iter().any(|d| d.id == id))
            .unwrap_or(false)
    }

    pub async fn fail_queries_on(&self, collection: &str) {
        self.failing_queries.write().await.insert(collection.to_string());
    }

    pub async fn fail_deletes_on(&self, collection: &str) {
        self.failing_deletes.write().await.insert(collection.to_string());
    }

    pub async fn set_query_delay(&self, delay: std::time::Duration) {
        *self.query_delay.write().await = Some(delay);
    }

    pub async fn set_query_delay_on(&self, collection: &str, delay: std::time::Duration) {
        self.slow_collections
            .write()
            .await
            .insert(collection.to_string(), delay);
    }

    pub async fn cutoffs_seen(&self) -> Vec<DateTime<Utc>> {
        self.cutoffs.read().await.clone()
    }

    pub fn query_calls(&self) -> u64 {
        self.query_calls.load(Ordering::Relaxed)
    }

    pub fn delete_calls(&self) -> u64 {
        self.delete_calls.load(Ordering::Relaxed)
    }
}

fn ts(days_old: i64) -> String {
    (Utc::now() - Duration::days(days_old)).to_rfc3339()
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn query_at_or_before(
        &self,
        collection: &str,
        field: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Document>, DomainError> {
        self.query_calls.fetch_add(1, Ordering::Relaxed);
        self.cutoffs.write().await.push(cutoff);
        let delay = match self.slow_collections.read().await.get(collection) {
            Some(delay) => Some(*delay),
            None => *self.query_delay.read().await,
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing_queries.read().await.contains(collection) {
            return Err(DomainError::QueryFailed {
                collection: collection.to_string(),
                reason: "backend unavailable".to_string(),
            });
        }

        Ok(self
            .collections
            .read()
            .await
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| d.timestamp(field).map(|t| t <= cutoff).unwrap_or(false))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn batch_delete(&self, collection: &str, ids: &[String]) -> Result<u64, DomainError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        if self.failing_deletes.read().await.contains(collection) {
            return Err(DomainError::BatchDeleteFailed {
                collection: collection.to_string(),
                reason: "too many writes".to_string(),
            });
        }

        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|d| !ids.contains(&d.id));
        Ok((before - docs.len()) as u64)
    }
}
