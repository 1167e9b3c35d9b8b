use hf_core::catalog;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SymptomsArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SymptomRow {
    id: &'static str,
    label: &'static str,
}

/// Handle `homefix symptoms`.
pub fn handle(args: &SymptomsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = catalog::symptoms_for(args.appliance)
        .into_iter()
        .map(|symptom| SymptomRow {
            id: symptom.id,
            label: symptom.label,
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
