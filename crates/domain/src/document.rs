use crate::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A record as the document store returns it: an id plus the raw JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    pub fn new(id: impl Into<String>, data: Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Serialize a typed record. The record's `id` is kept out of the body.
    pub fn from_record<T: Serialize>(id: impl Into<String>, record: &T) -> Result<Self, DomainError> {
        let id = id.into();
        let mut data = serde_json::to_value(record).map_err(|e| DomainError::InvalidDocument {
            collection: String::new(),
            id: id.clone(),
            reason: e.to_string(),
        })?;
        if let Value::Object(map) = &mut data {
            map.remove("id");
        }
        Ok(Self { id, data })
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// Read an RFC 3339 timestamp field.
    pub fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        self.str_field(name)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Decode the body into a typed record, injecting the document id.
    pub fn decode<T: DeserializeOwned>(&self, collection: &str) -> Result<T, DomainError> {
        let mut data = self.data.clone();
        if let Value::Object(map) = &mut data {
            map.insert("id".to_string(), Value::String(self.id.clone()));
        }
        serde_json::from_value(data).map_err(|e| DomainError::InvalidDocument {
            collection: collection.to_string(),
            id: self.id.clone(),
            reason: e.to_string(),
        })
    }
}
