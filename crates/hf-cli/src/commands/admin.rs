use anyhow::Context;
use hf_core::entities::AdminSession;
use hf_store::{AdminGate, AdminQuery};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AdminArgs;
use crate::cli::subcommands::AdminCommands;
use crate::commands::technician::TechnicianRow;
use crate::context::AppContext;
use crate::output::output;
use crate::prompt::confirm;

#[derive(Debug, Serialize)]
struct FeeResponse {
    system_fee: String,
}

#[derive(Debug, Serialize)]
struct DoneResponse<'a> {
    action: &'a str,
    id: Option<&'a str>,
}

/// Handle `homefix admin`. Each invocation logs in, runs one action, and
/// logs out.
pub async fn handle(args: &AdminArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let gate = AdminGate::new(&ctx.store, &ctx.config.admin);
    let session = gate
        .login(&args.passphrase)
        .await
        .context("admin login failed")?;

    let result = run(&args.action, &gate, &session, flags).await;
    gate.logout(&session).await;
    result
}

async fn run(
    action: &AdminCommands,
    gate: &AdminGate<'_>,
    session: &AdminSession,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AdminCommands::List { search, status } => {
            let query = AdminQuery {
                search: search.clone(),
                status: *status,
            };
            let records = gate.admin_list(session, &query).await?;
            let rows = records.iter().map(TechnicianRow::from).collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        AdminCommands::Stats => output(&gate.stats(session).await?, flags.format),
        AdminCommands::Approve { id } => {
            let record = gate.approve(session, id).await?;
            output(&TechnicianRow::from(&record), flags.format)
        }
        AdminCommands::Reject { id } => {
            let record = gate.reject(session, id).await?;
            output(&TechnicianRow::from(&record), flags.format)
        }
        AdminCommands::Delete { id, yes } => {
            let Some(confirmation) = confirm(&format!("Delete registration {id}?"), *yes)? else {
                flags.note("Nothing deleted.");
                return Ok(());
            };
            if !gate.delete(session, id, confirmation).await? {
                anyhow::bail!("no registration with id {id}");
            }
            output(
                &DoneResponse {
                    action: "deleted",
                    id: Some(id.as_str()),
                },
                flags.format,
            )
        }
        AdminCommands::Fee { value: None } => {
            let system_fee = gate.system_fee(session).await?;
            output(&FeeResponse { system_fee }, flags.format)
        }
        AdminCommands::Fee { value: Some(value) } => {
            let system_fee = gate.set_system_fee(session, value).await?;
            output(&FeeResponse { system_fee }, flags.format)
        }
        AdminCommands::Rotate { new_passphrase } => {
            gate.rotate_passphrase(session, new_passphrase).await?;
            output(
                &DoneResponse {
                    action: "passphrase rotated",
                    id: None,
                },
                flags.format,
            )
        }
    }
}
