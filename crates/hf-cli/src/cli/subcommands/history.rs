use clap::Subcommand;

/// Saved diagnosis commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HistoryCommands {
    /// List saved diagnoses, newest first.
    List,
    /// Show a saved diagnosis.
    Get { id: String },
    /// Delete a saved diagnosis.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Delete every saved diagnosis.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}
