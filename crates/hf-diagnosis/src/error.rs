use hf_gateway::GatewayError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// The AI service could not produce a usable answer. The gateway's
    /// reason is kept as the source for logging.
    #[error("AI service unavailable")]
    Unavailable(#[source] GatewayError),
}

impl ResolveError {
    #[must_use]
    pub const fn gateway_error(&self) -> &GatewayError {
        match self {
            Self::Unavailable(e) => e,
        }
    }
}

impl From<GatewayError> for ResolveError {
    fn from(e: GatewayError) -> Self {
        Self::Unavailable(e)
    }
}
