//! # hf-schema
//!
//! JSON Schema generation and validation for homefix.
//!
//! Entity types are defined in `hf-core` with `#[derive(JsonSchema)]`. This
//! crate builds the schemas once and validates untrusted JSON against them:
//! the AI gateway checks every structured model reply here before
//! deserializing it.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{DETAILED_ENRICHMENT, DIAGNOSIS, SchemaRegistry};
