//! Central schema registry for homefix types.
//!
//! Schemas are built from hf-core types at construction time using
//! [`schemars::schema_for!`]; validation goes through `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// Name of the structured free-text diagnosis payload.
pub const DIAGNOSIS: &str = "diagnosis";
/// Name of the detail enrichment payload.
pub const DETAILED_ENRICHMENT: &str = "detailed_enrichment";

/// Keywords the generative API does not accept in a response schema.
const RESPONSE_SCHEMA_STRIPPED: [&str; 2] = ["$schema", "title"];

/// Store of all JSON Schemas homefix validates against.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- AI reply payloads ---
        register!(schemas, DIAGNOSIS, hf_core::entities::Diagnosis);
        register!(
            schemas,
            DETAILED_ENRICHMENT,
            hf_core::entities::DetailedEnrichment
        );

        // --- Persisted records ---
        register!(
            schemas,
            "saved_diagnosis_record",
            hf_core::entities::SavedDiagnosisRecord
        );
        register!(
            schemas,
            "technician_record",
            hf_core::entities::TechnicianRecord
        );
        register!(schemas, "chat_message", hf_core::entities::ChatMessage);
        register!(schemas, "settings", hf_core::entities::Settings);

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// The named schema with top-level metadata keywords removed, suitable
    /// for a generation request's response schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown.
    pub fn response_schema(&self, name: &str) -> Result<Value, SchemaError> {
        let mut schema = self
            .get(name)
            .cloned()
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;
        if let Value::Object(map) = &mut schema {
            for key in RESPONSE_SCHEMA_STRIPPED {
                map.remove(key);
            }
        }
        Ok(schema)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compile(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_lists_all_schemas() {
        let reg = registry();
        assert_eq!(reg.schema_count(), 6);
        assert_eq!(
            reg.list(),
            vec![
                "chat_message",
                "detailed_enrichment",
                "diagnosis",
                "saved_diagnosis_record",
                "settings",
                "technician_record",
            ]
        );
    }

    #[test]
    fn unknown_schema_is_not_found() {
        let err = registry().validate("invoice", &json!({})).unwrap_err();
        assert!(matches!(err, SchemaError::NotFound(name) if name == "invoice"));
    }

    #[test]
    fn well_formed_diagnosis_passes() {
        let payload = json!({
            "causes": [
                {"description": "Resistência queimada", "percentage": 70},
                {"description": "Termostato", "percentage": 20}
            ],
            "costLevel": "Médio",
            "costRange": "R$ 150 - R$ 300",
            "tip": "Não abra o aparelho."
        });
        registry().validate(DIAGNOSIS, &payload).unwrap();
    }

    #[test]
    fn diagnosis_missing_tip_fails() {
        let payload = json!({
            "causes": [{"description": "x", "percentage": 10}],
            "costLevel": "Baixo",
            "costRange": "R$ 50"
        });
        let err = registry().validate(DIAGNOSIS, &payload).unwrap_err();
        let SchemaError::ValidationFailed { errors } = err else {
            panic!("expected ValidationFailed, got {err:?}");
        };
        assert!(errors.iter().any(|e| e.contains("tip")));
    }

    #[test]
    fn percentage_over_100_fails() {
        let payload = json!({
            "causes": [{"description": "x", "percentage": 150}],
            "costLevel": "Alto",
            "costRange": "R$ 900",
            "tip": "t"
        });
        assert!(registry().validate(DIAGNOSIS, &payload).is_err());
    }

    #[test]
    fn enrichment_requires_all_fields() {
        let reg = registry();
        reg.validate(
            DETAILED_ENRICHMENT,
            &json!({
                "detailedExplanation": "e",
                "additionalCauses": ["a"],
                "maintenanceTip": "m"
            }),
        )
        .unwrap();
        assert!(
            reg.validate(DETAILED_ENRICHMENT, &json!({"detailedExplanation": "e"}))
                .is_err()
        );
    }

    #[test]
    fn response_schema_drops_metadata() {
        let schema = registry().response_schema(DIAGNOSIS).unwrap();
        assert!(schema.get("$schema").is_none());
        assert!(schema.get("title").is_none());
        assert_eq!(schema["type"], "object");
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|v| v == "costLevel"));
    }
}
