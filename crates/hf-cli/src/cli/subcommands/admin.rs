use clap::Subcommand;
use hf_core::enums::TechnicianStatus;

/// Admin commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List registrations, newest first.
    List {
        /// Substring of name or city.
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_parser = parse_status)]
        status: Option<TechnicianStatus>,
    },
    /// Registration counts.
    Stats,
    /// Approve a registration.
    Approve { id: String },
    /// Reject a registration.
    Reject { id: String },
    /// Delete a registration.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Show or set the registration fee.
    Fee { value: Option<String> },
    /// Replace the admin passphrase.
    Rotate { new_passphrase: String },
}

fn parse_status(value: &str) -> Result<TechnicianStatus, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pending" => Ok(TechnicianStatus::Pending),
        "approved" => Ok(TechnicianStatus::Approved),
        "rejected" => Ok(TechnicianStatus::Rejected),
        other => Err(format!(
            "unknown status '{other}' (expected pending, approved, rejected)"
        )),
    }
}
