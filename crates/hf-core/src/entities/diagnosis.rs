use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CostLevel;
use crate::errors::CoreError;

/// A probable cause with an advisory likelihood. Percentages across a
/// diagnosis are display values and are not required to sum to 100.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Cause {
    pub description: String,
    #[schemars(range(max = 100))]
    pub percentage: u8,
}

impl Cause {
    #[must_use]
    pub fn new(description: impl Into<String>, percentage: u8) -> Self {
        Self {
            description: description.into(),
            percentage,
        }
    }
}

/// Deeper AI elaboration, present only after the user asked for it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedEnrichment {
    pub detailed_explanation: String,
    pub additional_causes: Vec<String>,
    pub maintenance_tip: String,
}

/// Probable causes, cost tier, and a practical tip for an appliance symptom.
///
/// Build through [`Diagnosis::new`]; enrichment produces a new value via
/// [`Diagnosis::with_enrichment`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    #[schemars(length(min = 1))]
    pub causes: Vec<Cause>,
    pub cost_level: CostLevel,
    pub cost_range: String,
    pub tip: String,
    #[serde(rename = "detailedAI", default, skip_serializing_if = "Option::is_none")]
    pub detailed_ai: Option<DetailedEnrichment>,
}

impl Diagnosis {
    /// Build an un-enriched diagnosis.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when `causes` is empty or a percentage
    /// exceeds 100.
    pub fn new(
        causes: Vec<Cause>,
        cost_level: CostLevel,
        cost_range: impl Into<String>,
        tip: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let diagnosis = Self {
            causes,
            cost_level,
            cost_range: cost_range.into(),
            tip: tip.into(),
            detailed_ai: None,
        };
        diagnosis.validate()?;
        Ok(diagnosis)
    }

    /// Check the value invariants of a diagnosis that arrived from outside
    /// (store, gateway).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when `causes` is empty or a percentage
    /// exceeds 100.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.causes.is_empty() {
            return Err(CoreError::Validation(
                "diagnosis must list at least one cause".into(),
            ));
        }
        if let Some(cause) = self.causes.iter().find(|c| c.percentage > 100) {
            return Err(CoreError::Validation(format!(
                "cause '{}' has percentage {} (max 100)",
                cause.description, cause.percentage
            )));
        }
        Ok(())
    }

    /// Return a copy carrying `enrichment`, replacing any previous one.
    #[must_use]
    pub fn with_enrichment(self, enrichment: DetailedEnrichment) -> Self {
        Self {
            detailed_ai: Some(enrichment),
            ..self
        }
    }

    #[must_use]
    pub const fn is_enriched(&self) -> bool {
        self.detailed_ai.is_some()
    }
}
