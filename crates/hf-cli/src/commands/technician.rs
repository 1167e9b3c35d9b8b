use std::path::Path;

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hf_core::catalog;
use hf_core::entities::TechnicianRecord;
use hf_core::enums::TechnicianStatus;
use hf_core::validation::{validate_city, validate_registration};
use hf_diagnosis::share;
use hf_store::Directory;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TechnicianCommands;
use crate::context::AppContext;
use crate::output::output;

/// A technician as listed by search and admin views. The payment proof stays
/// out of listings.
#[derive(Debug, Serialize)]
pub struct TechnicianRow {
    pub id: String,
    pub name: String,
    pub city: String,
    pub specialties: Vec<&'static str>,
    pub status: TechnicianStatus,
    pub verified: bool,
    pub whatsapp: String,
}

impl From<&TechnicianRecord> for TechnicianRow {
    fn from(record: &TechnicianRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            city: record.city.clone(),
            specialties: record
                .specialties
                .iter()
                .map(|kind| catalog::appliance(*kind).label)
                .collect(),
            status: record.status,
            verified: record.is_verified,
            whatsapp: share::whatsapp_link(&record.phone),
        }
    }
}

#[derive(Debug, Serialize)]
struct RegistrationResponse {
    #[serde(flatten)]
    technician: TechnicianRow,
    registration_fee: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    notify_admin: Option<String>,
}

/// Handle `homefix technician`.
pub async fn handle(
    action: &TechnicianCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TechnicianCommands::Register {
            name,
            phone,
            city,
            specialty,
            proof,
        } => {
            let proof = proof.as_deref().map(read_proof).transpose()?;
            let registration =
                validate_registration(name, phone, city, specialty, proof.as_deref())?;
            let admin_email = &ctx.config.directory.admin_email;
            let notify_admin = (!admin_email.is_empty())
                .then(|| share::registration_mailto(admin_email, &registration));

            let record = ctx.store.register_technician(registration).await?;
            let settings = ctx.store.load_settings().await?;
            flags.note("Registration received. It will be listed once an admin approves it.");
            output(
                &RegistrationResponse {
                    technician: TechnicianRow::from(&record),
                    registration_fee: settings.system_fee,
                    notify_admin,
                },
                flags.format,
            )
        }
        TechnicianCommands::Search { city, specialty } => {
            let city = validate_city(city)?;
            let directory = Directory::new(&ctx.store, &ctx.config.directory);
            let found = directory.search(city, *specialty).await?;
            let rows = found.iter().map(TechnicianRow::from).collect::<Vec<_>>();
            output(&rows, flags.format)
        }
    }
}

/// Read an attachment from disk as a data URL.
fn read_proof(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read payment proof {}", path.display()))?;
    let mime = match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    };
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}
