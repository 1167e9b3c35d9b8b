use hf_core::catalog;
use hf_core::entities::SavedDiagnosisRecord;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HistoryCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::prompt::confirm;

#[derive(Debug, Serialize)]
struct HistoryRow {
    id: String,
    saved_at: String,
    appliance: &'static str,
    problem: String,
    cost_level: String,
    cost_range: String,
    detailed: bool,
}

impl From<&SavedDiagnosisRecord> for HistoryRow {
    fn from(record: &SavedDiagnosisRecord) -> Self {
        Self {
            id: record.id.clone(),
            saved_at: record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            appliance: catalog::appliance(record.appliance).label,
            problem: record.problem.clone(),
            cost_level: record.diagnosis.cost_level.to_string(),
            cost_range: record.diagnosis.cost_range.clone(),
            detailed: record.diagnosis.is_enriched(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DeleteResponse<'a> {
    deleted: &'a str,
}

#[derive(Debug, Serialize)]
struct ClearResponse {
    cleared: usize,
}

/// Handle `homefix history`.
pub async fn handle(
    action: &HistoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HistoryCommands::List => {
            let records = ctx.store.list_history().await?;
            let rows = records.iter().map(HistoryRow::from).collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        HistoryCommands::Get { id } => {
            let record = ctx.store.get_history(id).await?;
            output(&record, flags.format)
        }
        HistoryCommands::Delete { id, yes } => {
            // surfaces NotFound before asking
            let record = ctx.store.get_history(id).await?;
            let question = format!("Delete the saved diagnosis '{}'?", record.problem);
            let Some(confirmation) = confirm(&question, *yes)? else {
                flags.note("Nothing deleted.");
                return Ok(());
            };
            ctx.store.delete_history(id, confirmation).await?;
            output(&DeleteResponse { deleted: id }, flags.format)
        }
        HistoryCommands::Clear { yes } => {
            let count = ctx.store.list_history().await?.len();
            let question = format!("Delete all {count} saved diagnoses?");
            let Some(confirmation) = confirm(&question, *yes)? else {
                flags.note("Nothing deleted.");
                return Ok(());
            };
            ctx.store.clear_history(confirmation).await?;
            output(&ClearResponse { cleared: count }, flags.format)
        }
    }
}
