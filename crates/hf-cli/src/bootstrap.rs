use std::path::Path;

use anyhow::Context;
use hf_config::HomefixConfig;

/// Populate the process env from dotenv files, then read the layered config.
///
/// `<root>/.env` is preferred. Without one, dotenvy's own upward search runs
/// and a missing file is not an error.
pub fn load_config(project_root: &Path) -> anyhow::Result<HomefixConfig> {
    let project_env = project_root.join(".env");
    if project_env.is_file() {
        dotenvy::from_path(&project_env)
            .with_context(|| format!("cannot read {}", project_env.display()))?;
    } else if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            tracing::warn!(%error, "ignoring unreadable .env");
        }
    }

    let config = HomefixConfig::load_from(project_root)?;
    tracing::debug!(
        gemini = config.gemini.is_configured(),
        root = %project_root.display(),
        "configuration loaded"
    );
    Ok(config)
}
