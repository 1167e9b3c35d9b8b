use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ApplianceKind, TechnicianStatus};

/// A registered technician.
///
/// Created pending and unverified; only the admin approval transition changes
/// `status` and `is_verified` afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianRecord {
    pub id: String,
    pub name: String,
    /// Digits only.
    pub phone: String,
    /// Trimmed and lowercased on write.
    pub city: String,
    pub specialties: Vec<ApplianceKind>,
    pub is_verified: bool,
    pub status: TechnicianStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_proof: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schemars(with = "i64")]
    pub created_at: DateTime<Utc>,
}

impl TechnicianRecord {
    #[must_use]
    pub fn has_specialty(&self, appliance: ApplianceKind) -> bool {
        self.specialties.contains(&appliance)
    }
}

/// Registration form contents, already passed through
/// [`crate::validation::validate_registration`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTechnician {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub specialties: Vec<ApplianceKind>,
    pub payment_proof: Option<String>,
}
