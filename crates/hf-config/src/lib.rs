//! # hf-config
//!
//! Layered configuration loading for homefix using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HOMEFIX_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY`, mapped to `gemini.api_key`
//! 3. Project-level `.homefix/config.toml`
//! 4. User-level `~/.config/homefix/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HOMEFIX_GEMINI__API_KEY` -> `gemini.api_key`,
//! `HOMEFIX_CHAT__TRANSMISSION` -> `chat.transmission`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use hf_config::HomefixConfig;
//!
//! let config = HomefixConfig::load_with_dotenv().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("model: {}", config.gemini.model);
//! }
//! ```

mod admin;
mod chat;
mod directory;
mod error;
mod gemini;
mod store;

pub use admin::AdminConfig;
pub use chat::{ChatConfig, TransmissionScope};
pub use directory::DirectoryConfig;
pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-relative directory holding local config and the default database.
pub const PROJECT_DIR: &str = ".homefix";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HomefixConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

impl HomefixConfig {
    /// Load configuration from all sources, with the current directory as the
    /// project root.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration using `project_root` for the project-level layer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or a value is out of range.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a source fails to parse or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain rooted at the current directory.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_for(Path::new("."))
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: the conventional Gemini key variable
        figment = figment.merge(
            Env::raw()
                .only(&["GEMINI_API_KEY"])
                .map(|_| "gemini.api_key".into()),
        );

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed("HOMEFIX_").split("__"))
    }

    /// Reject values that would make a component unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gemini.timeout_secs",
                reason: "must be greater than zero".into(),
            });
        }
        if self.admin.session_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "admin.session_ttl_secs",
                reason: "must be greater than zero".into(),
            });
        }
        if self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.path",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Store path resolved against `project_root` when relative.
    #[must_use]
    pub fn store_path(&self, project_root: &Path) -> PathBuf {
        if self.store.path.is_absolute() {
            self.store.path.clone()
        } else {
            project_root.join(&self.store.path)
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("homefix").join("config.toml"))
    }

    /// Load `.env` from the current directory or any parent. Silently does
    /// nothing if no `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
