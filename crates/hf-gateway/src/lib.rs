//! # hf-gateway
//!
//! AI enrichment gateway for homefix.
//!
//! [`AiGateway`] is the seam the diagnosis resolver and chat assistant call
//! through; [`GeminiClient`] implements it over the Gemini `generateContent`
//! REST endpoint. Structured replies are checked against the schemars-derived
//! schemas in `hf-schema` before they are deserialized, so a malformed reply
//! surfaces as [`GatewayError::SchemaViolation`] instead of a half-filled value.
//!
//! The gateway does not cache, retry, or deduplicate. The only timeout is the
//! transport timeout from [`hf_config::GeminiConfig::timeout_secs`].

mod error;
mod gemini;
mod http;
pub mod prompts;

pub use error::GatewayError;
pub use gemini::GeminiClient;
pub use hf_config::TransmissionScope;

use std::future::Future;

use hf_core::entities::{ChatMessage, DetailedEnrichment, Diagnosis};
use hf_core::enums::{ApplianceKind, ChatRole};

/// Calls to the generative service.
pub trait AiGateway {
    /// Structured diagnosis for a free-text symptom description.
    fn diagnose_free_text(
        &self,
        appliance: ApplianceKind,
        description: &str,
    ) -> impl Future<Output = Result<Diagnosis, GatewayError>> + Send;

    /// Layperson elaboration for a known problem label.
    fn detail_enrichment(
        &self,
        appliance: ApplianceKind,
        problem: &str,
    ) -> impl Future<Output = Result<DetailedEnrichment, GatewayError>> + Send;

    /// Assistant reply to the conversation, sending the turns `scope` selects.
    fn chat(
        &self,
        history: &[ChatMessage],
        scope: TransmissionScope,
    ) -> impl Future<Output = Result<String, GatewayError>> + Send;
}

/// The slice of `history` a chat call transmits.
///
/// `LastTurn` yields only the newest user turn; it is empty when the history
/// holds no user turn.
#[must_use]
pub fn select_turns(history: &[ChatMessage], scope: TransmissionScope) -> &[ChatMessage] {
    match scope {
        TransmissionScope::FullHistory => history,
        TransmissionScope::LastTurn => history
            .iter()
            .rposition(|m| m.role == ChatRole::User)
            .map_or(&history[..0], |i| std::slice::from_ref(&history[i])),
    }
}
