use clap::{Args, Subcommand};
use hf_core::enums::ApplianceKind;

use crate::cli::subcommands::{AdminCommands, HistoryCommands, TechnicianCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List catalog appliances.
    Appliances,
    /// List the symptoms offered for an appliance.
    Symptoms(SymptomsArgs),
    /// Diagnose an appliance from a catalog symptom or a free-text description.
    Diagnose(DiagnoseArgs),
    /// Saved diagnoses.
    History {
        #[command(subcommand)]
        action: HistoryCommands,
    },
    /// Talk to the repair assistant (reads lines from stdin).
    Chat,
    /// Technician registration and directory search.
    Technician {
        #[command(subcommand)]
        action: TechnicianCommands,
    },
    /// Directory moderation (requires the admin passphrase).
    Admin(AdminArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SymptomsArgs {
    #[arg(value_parser = parse_appliance)]
    pub appliance: ApplianceKind,
}

#[derive(Clone, Debug, Args)]
#[command(group(
    clap::ArgGroup::new("input")
        .required(true)
        .args(["symptom", "describe"])
))]
pub struct DiagnoseArgs {
    #[arg(value_parser = parse_appliance)]
    pub appliance: ApplianceKind,
    /// Catalog symptom id (see `homefix symptoms <appliance>`).
    #[arg(long)]
    pub symptom: Option<String>,
    /// Free-text description, diagnosed by the AI service.
    #[arg(long)]
    pub describe: Option<String>,
    /// Ask the AI service for a detailed explanation.
    #[arg(long)]
    pub detail: bool,
    /// Save the result to history.
    #[arg(long)]
    pub save: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AdminArgs {
    #[arg(long)]
    pub passphrase: String,
    #[command(subcommand)]
    pub action: AdminCommands,
}

pub fn parse_appliance(value: &str) -> Result<ApplianceKind, String> {
    value.parse().map_err(|e: hf_core::errors::CoreError| e.to_string())
}
