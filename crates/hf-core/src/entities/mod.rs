//! Entity structs for all homefix domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip through the record store and schema validation at the AI boundary.
//! Field names are camelCase, matching the persisted key-value layout.

mod admin;
mod appliance;
mod chat;
mod diagnosis;
mod history;
mod settings;
mod technician;

pub use admin::AdminSession;
pub use appliance::{Appliance, Symptom};
pub use chat::ChatMessage;
pub use diagnosis::{Cause, DetailedEnrichment, Diagnosis};
pub use history::SavedDiagnosisRecord;
pub use settings::{DEFAULT_ADMIN_PASSPHRASE, DEFAULT_SYSTEM_FEE, Settings};
pub use technician::{NewTechnician, TechnicianRecord};
