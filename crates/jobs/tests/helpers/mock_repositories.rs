#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use guesswin_application::ports::DocumentStore;
use guesswin_domain::{Document, DomainError};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MockDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    query_delay: Arc<RwLock<Option<std::time::Duration>>>,
    slow_collections: Arc<RwLock<HashMap<String, std::time::Duration>>>,
    query_calls: Arc<AtomicU64>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
            query_delay: Arc::new(RwLock::new(None)),
            slow_collections: Arc::new(RwLock::new(HashMap::new())),
            query_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn add_bet(&self, id: &str, days_old: i64) {
        let ts = (Utc::now() - Duration::days(days_old)).to_rfc3339();
        self.collections
            .write()
            .await
            .entry("bets".to_string())
            .or_default()
            .push(Document::new(id, json!({ "timestamp": ts, "amount": 10.0 })));
    }

    pub async fn add_match(&self, id: &str, status: &str, days_old: i64) {
        let ts = (Utc::now() - Duration::days(days_old)).to_rfc3339();
        self.collections
            .write()
            .await
            .entry("matches".to_string())
            .or_default()
            .push(Document::new(id, json!({ "startTime": ts, "status": status })));
    }

    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(|docs| docs.len())
            .unwrap_or(0)
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

    pub fn query_calls(&self) -> u64 {
        self.query_calls.load(Ordering::Relaxed)
    }
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
        let delay = match self.slow_collections.read().await.get(collection) {
            Some(delay) => Some(*delay),
            None => *self.query_delay.read().await,
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
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
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|d| !ids.contains(&d.id));
        Ok((before - docs.len()) as u64)
    }
}
