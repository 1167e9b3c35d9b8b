use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Diagnosis;
use crate::enums::ApplianceKind;

/// A diagnosis the user explicitly saved. Owned entirely by the record store.
///
/// `problem` is the symptom label (or a marker for free-text diagnoses); the
/// diagnosis itself carries no reference to appliance or symptom.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SavedDiagnosisRecord {
    pub id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    #[schemars(with = "i64")]
    pub timestamp: DateTime<Utc>,
    pub appliance: ApplianceKind,
    pub problem: String,
    pub diagnosis: Diagnosis,
}
