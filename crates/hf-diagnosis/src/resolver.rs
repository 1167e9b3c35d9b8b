//! Diagnosis resolution: catalog lookup, free-text AI diagnosis, enrichment.

use hf_core::catalog;
use hf_core::entities::{DetailedEnrichment, Diagnosis};
use hf_core::enums::ApplianceKind;
use hf_gateway::AiGateway;

use crate::error::ResolveError;

/// Canned diagnosis for `(appliance, symptom_id)`, or the catch-all default
/// when the table has no entry for that pair.
#[must_use]
pub fn resolve_from_catalog(appliance: ApplianceKind, symptom_id: &str) -> Diagnosis {
    let key = catalog::diagnosis_key(appliance, symptom_id);
    catalog::base_diagnosis(&key).map_or_else(
        || {
            tracing::debug!(%key, "catalog miss, using default diagnosis");
            catalog::default_diagnosis().clone()
        },
        Clone::clone,
    )
}

/// AI-backed resolution over an [`AiGateway`].
pub struct Resolver<G> {
    gateway: G,
}

impl<G: AiGateway> Resolver<G> {
    pub const fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Diagnose a free-text description. The description must already have
    /// passed [`hf_core::validation::validate_description`].
    ///
    /// Never falls back to the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Unavailable`] on any gateway failure.
    pub async fn resolve_from_free_text(
        &self,
        appliance: ApplianceKind,
        description: &str,
    ) -> Result<Diagnosis, ResolveError> {
        self.gateway
            .diagnose_free_text(appliance, description)
            .await
            .map_err(|e| {
                tracing::warn!(%appliance, error = %e, "free-text diagnosis failed");
                ResolveError::from(e)
            })
    }

    /// One enrichment attempt for `problem_label`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Unavailable`] on any gateway failure.
    pub async fn enrich_with_detail(
        &self,
        appliance: ApplianceKind,
        problem_label: &str,
    ) -> Result<DetailedEnrichment, ResolveError> {
        self.gateway
            .detail_enrichment(appliance, problem_label)
            .await
            .map_err(|e| {
                tracing::warn!(%appliance, error = %e, "detail enrichment failed");
                ResolveError::from(e)
            })
    }

    /// `diagnosis` carrying a fresh enrichment, or `diagnosis` unchanged if the
    /// attempt failed.
    pub async fn enrich(
        &self,
        diagnosis: Diagnosis,
        appliance: ApplianceKind,
        problem_label: &str,
    ) -> Diagnosis {
        match self.enrich_with_detail(appliance, problem_label).await {
            Ok(enrichment) => diagnosis.with_enrichment(enrichment),
            Err(_) => diagnosis,
        }
    }

    /// Free-text diagnosis, optionally enriched. The description itself is
    /// the problem the enrichment explains, and a failed enrichment keeps the
    /// basic diagnosis.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::Unavailable` when the free-text call fails.
    pub async fn diagnose_description(
        &self,
        appliance: ApplianceKind,
        description: &str,
        detail: bool,
    ) -> Result<Diagnosis, ResolveError> {
        let diagnosis = self.resolve_from_free_text(appliance, description).await?;
        if detail {
            Ok(self.enrich(diagnosis, appliance, description).await)
        } else {
            Ok(diagnosis)
        }
    }
}
