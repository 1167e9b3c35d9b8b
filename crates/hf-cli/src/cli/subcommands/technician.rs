use std::path::PathBuf;

use clap::Subcommand;
use hf_core::enums::ApplianceKind;

use crate::cli::root_commands::parse_appliance;

/// Technician commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TechnicianCommands {
    /// Submit a registration for admin review.
    Register {
        #[arg(long)]
        name: String,
        /// WhatsApp number with area code.
        #[arg(long)]
        phone: String,
        #[arg(long)]
        city: String,
        /// Repeat for each appliance served.
        #[arg(long, value_parser = parse_appliance)]
        specialty: Vec<ApplianceKind>,
        /// Image or PDF of the registration fee payment.
        #[arg(long)]
        proof: Option<PathBuf>,
    },
    /// Find approved technicians in a city.
    Search {
        city: String,
        #[arg(long, value_parser = parse_appliance)]
        specialty: Option<ApplianceKind>,
    },
}
