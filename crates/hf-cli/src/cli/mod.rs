use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// `homefix [FLAGS] <COMMAND>`; every flag is accepted on either side of the command.
#[derive(Debug, Parser)]
#[command(
    name = "homefix",
    version,
    about = "Appliance fault diagnosis and a directory of repair technicians"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// How results are printed
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log at debug level to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding .homefix (searched upward from cwd when omitted)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub project: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        let Self {
            format,
            quiet,
            verbose,
            project,
            ..
        } = self;
        GlobalFlags {
            format: *format,
            quiet: *quiet,
            verbose: *verbose,
            project: project.clone(),
        }
    }
}
