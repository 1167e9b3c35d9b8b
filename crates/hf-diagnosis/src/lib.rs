//! # hf-diagnosis
//!
//! Turns an appliance plus a symptom (or a free-text description) into a
//! [`Diagnosis`](hf_core::entities::Diagnosis), optionally enriched, and runs
//! the conversational assistant.
//!
//! Catalog resolution is pure and never fails. Everything that goes through
//! the AI gateway can fail, and every such failure is reported to callers as
//! the single [`ResolveError::Unavailable`] outcome.

pub mod chat;
mod error;
pub mod resolver;
pub mod share;

pub use chat::{ChatAssistant, FALLBACK_REPLY, GREETING};
pub use error::ResolveError;
pub use resolver::{Resolver, resolve_from_catalog};
