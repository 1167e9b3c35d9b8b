use anyhow::Context;
use hf_core::catalog;
use hf_core::entities::Diagnosis;
use hf_core::enums::ApplianceKind;
use hf_core::validation::validate_description;
use hf_diagnosis::{Resolver, resolve_from_catalog, share};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DiagnoseArgs;
use crate::context::AppContext;
use crate::output::output;

const FREE_TEXT_FAILED: &str =
    "Não foi possível gerar um diagnóstico automático. Tente selecionar uma opção da lista.";

#[derive(Debug, Serialize)]
struct DiagnosisResponse {
    appliance: &'static str,
    problem: String,
    #[serde(flatten)]
    diagnosis: Diagnosis,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_id: Option<String>,
    share: String,
}

/// Handle `homefix diagnose`.
pub async fn handle(
    args: &DiagnoseArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let appliance = args.appliance;
    let (problem, diagnosis) = match (&args.symptom, &args.describe) {
        (Some(symptom_id), _) => {
            let symptom = catalog::find_symptom(appliance, symptom_id).with_context(|| {
                format!("unknown symptom '{symptom_id}'; see `homefix symptoms {appliance}`")
            })?;
            let diagnosis = resolve_from_catalog(appliance, symptom_id);
            let diagnosis = if args.detail {
                enrich(diagnosis, appliance, symptom.label, ctx).await
            } else {
                diagnosis
            };
            (symptom.label.to_string(), diagnosis)
        }
        (None, Some(description)) => {
            let description = validate_description(description)?;
            let diagnosis = Resolver::new(ctx.gateway()?)
                .diagnose_description(appliance, description, args.detail)
                .await
                .context(FREE_TEXT_FAILED)?;
            (description.to_string(), diagnosis)
        }
        (None, None) => anyhow::bail!("pass --symptom or --describe"),
    };

    if args.detail && !diagnosis.is_enriched() {
        flags.note("Detailed explanation is unavailable right now; showing the basic diagnosis.");
    }

    let saved_id = if args.save {
        let record = ctx
            .store
            .save_diagnosis(appliance, &problem, &diagnosis)
            .await?;
        Some(record.id)
    } else {
        None
    };

    output(
        &DiagnosisResponse {
            appliance: catalog::appliance(appliance).label,
            problem,
            share: share::share_text(appliance, &diagnosis),
            diagnosis,
            saved_id,
        },
        flags.format,
    )
}

/// Best effort: without a configured AI service the diagnosis stays as is.
async fn enrich(
    diagnosis: Diagnosis,
    appliance: ApplianceKind,
    problem: &str,
    ctx: &AppContext,
) -> Diagnosis {
    match ctx.gateway() {
        Ok(gateway) => Resolver::new(gateway).enrich(diagnosis, appliance, problem).await,
        Err(error) => {
            tracing::warn!(error = %format!("{error:#}"), "detailed explanation unavailable");
            diagnosis
        }
    }
}
