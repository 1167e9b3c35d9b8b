//! Errors shared by the homefix crates.
//!
//! `StoreError` and `GatewayError` live with their crates and wrap this one
//! where needed; the binary folds everything into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// No record with this id.
    #[error("{entity_type} '{id}' not found")]
    NotFound { entity_type: String, id: String },

    /// The status machine does not allow this move.
    #[error("cannot move {entity_type} '{id}' from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// Input rejected by a caller-side gate or a value invariant.
    #[error("{0}")]
    Validation(String),
}
