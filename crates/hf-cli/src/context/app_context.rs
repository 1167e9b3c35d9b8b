use std::path::Path;

use anyhow::Context;
use hf_config::HomefixConfig;
use hf_gateway::GeminiClient;
use hf_store::RecordStore;

use super::config_warnings::warn_unconfigured;
use super::project_root::resolve_project_root;
use crate::bootstrap;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: RecordStore,
    pub config: HomefixConfig,
}

impl AppContext {
    /// Resolve the project root from `--project` or the cwd, load its config,
    /// and open the store.
    pub async fn open(project: Option<&str>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        let project_root = resolve_project_root(project, &cwd)?;
        let config = bootstrap::load_config(&project_root)?;
        warn_unconfigured(&config);
        Self::init(&project_root, config)
            .await
            .context("failed to initialize homefix")
    }

    /// Open the record store under the resolved project root.
    async fn init(project_root: &Path, config: HomefixConfig) -> anyhow::Result<Self> {
        let db_path = config.store_path(project_root);
        let store = RecordStore::open(&db_path)
            .await
            .with_context(|| format!("failed to open record store at {}", db_path.display()))?;
        tracing::debug!(path = %db_path.display(), "record store opened");

        Ok(Self { store, config })
    }

    /// Build the AI gateway client. Only commands that call the AI service
    /// need it, so a missing API key is reported here rather than at startup.
    pub fn gateway(&self) -> anyhow::Result<GeminiClient> {
        GeminiClient::new(&self.config.gemini).context("AI service is not available")
    }
}
