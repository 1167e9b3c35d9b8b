use hf_core::catalog;
use hf_core::enums::ApplianceKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ApplianceRow {
    id: ApplianceKind,
    label: &'static str,
    symptoms: usize,
}

/// Handle `homefix appliances`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = catalog::appliances()
        .iter()
        .map(|appliance| ApplianceRow {
            id: appliance.id,
            label: appliance.label,
            symptoms: catalog::symptoms_for(appliance.id).len(),
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
