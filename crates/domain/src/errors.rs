use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Query on '{collection}' failed: {reason}")]
    QueryFailed { collection: String, reason: String },

    #[error("Batch delete on '{collection}' failed: {reason}")]
    BatchDeleteFailed { collection: String, reason: String },

    #[error("Operation on '{collection}' timed out after {secs}s")]
    OperationTimeout { collection: String, secs: u64 },

    #[error("No retention policy for collection: {0}")]
    UnknownCollection(String),

    #[error("Invalid document {id} in '{collection}': {reason}")]
    InvalidDocument {
        collection: String,
        id: String,
        reason: String,
    },

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
