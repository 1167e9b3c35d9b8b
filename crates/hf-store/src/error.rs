//! Store error types.

use hf_core::errors::CoreError;
use thiserror::Error;

/// Errors from store, directory, and admin gate operations.
///
/// Corrupt persisted values are never reported here; they read as empty.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Creating the database directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized for writing.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Lookup, transition, or validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Wrong passphrase, or a session this gate did not issue or has revoked.
    #[error("Access denied")]
    AccessDenied,

    /// The admin session outlived its TTL.
    #[error("Admin session expired; log in again")]
    SessionExpired,

    /// The OS random source failed while issuing a session token.
    #[error("Random source unavailable: {0}")]
    Entropy(String),
}

impl StoreError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::Core(CoreError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        })
    }
}
