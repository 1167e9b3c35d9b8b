use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module. The catalog
/// commands run without a project; everything else opens one first.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let open = || AppContext::open(flags.project.as_deref());
    match command {
        Commands::Appliances => commands::appliances::handle(flags),
        Commands::Symptoms(args) => commands::symptoms::handle(&args, flags),
        Commands::Diagnose(args) => commands::diagnose::handle(&args, &open().await?, flags).await,
        Commands::History { action } => {
            commands::history::handle(&action, &open().await?, flags).await
        }
        Commands::Chat => commands::chat::handle(&open().await?).await,
        Commands::Technician { action } => {
            commands::technician::handle(&action, &open().await?, flags).await
        }
        Commands::Admin(args) => commands::admin::handle(&args, &open().await?, flags).await,
    }
}
