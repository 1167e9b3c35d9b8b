use clap::ValueEnum;

/// How command results are printed on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns for people.
    Table,
    /// Single-line JSON for pipes.
    Raw,
}

/// Flags shared by every command, accepted before or after the subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub project: Option<String>,
}

impl GlobalFlags {
    /// Whether to print human hints on stderr next to the result.
    #[must_use]
    pub fn notes_enabled(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Table
    }

    /// Print a hint on stderr unless notes are off.
    pub fn note(&self, message: &str) {
        if self.notes_enabled() {
            eprintln!("{message}");
        }
    }
}
