//! Gateway error types.

use thiserror::Error;

/// Errors that can occur when calling the generative service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No API key is configured.
    #[error("gemini API key is not configured (set HOMEFIX_GEMINI__API_KEY or GEMINI_API_KEY)")]
    NotConfigured,

    /// HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// The reply was not valid JSON or did not match the expected shape.
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// The reply carried no usable text.
    #[error("empty response: {0}")]
    EmptyResponse(String),

    /// The chat history holds no user turn to answer.
    #[error("chat history has no user turn to send")]
    NothingToSend,
}

impl GatewayError {
    /// Whether the failure happened before a reply was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::RateLimited { .. })
    }

    /// Whether a reply arrived but failed the boundary checks.
    #[must_use]
    pub const fn is_schema_violation(&self) -> bool {
        matches!(self, Self::SchemaViolation(_))
    }
}
