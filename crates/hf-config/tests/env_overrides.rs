//! Environment variables layered over TOML.

use figment::Jail;
use hf_config::{HomefixConfig, TransmissionScope};
use pretty_assertions::assert_eq;
use std::path::Path;

#[test]
fn prefixed_env_fills_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("HOMEFIX_GEMINI__API_KEY", "env-key");
        jail.set_env("HOMEFIX_ADMIN__SESSION_TTL_SECS", "120");
        jail.set_env("HOMEFIX_DIRECTORY__INCLUDE_FEATURED", "true");

        let config = HomefixConfig::load_from(Path::new(".")).expect("config loads");
        assert_eq!(config.gemini.api_key, "env-key");
        assert_eq!(config.admin.session_ttl_secs, 120);
        assert!(config.directory.include_featured);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".homefix")?;
        jail.create_file(
            ".homefix/config.toml",
            r#"
[chat]
transmission = "full_history"
"#,
        )?;
        jail.set_env("HOMEFIX_CHAT__TRANSMISSION", "last_turn");

        let config = HomefixConfig::load_from(Path::new(".")).expect("config loads");
        assert_eq!(config.chat.transmission, TransmissionScope::LastTurn);
        Ok(())
    });
}

#[test]
fn conventional_gemini_key_is_read() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "plain-key");

        let config = HomefixConfig::load_from(Path::new(".")).expect("config loads");
        assert_eq!(config.gemini.api_key, "plain-key");
        Ok(())
    });
}

#[test]
fn prefixed_key_beats_conventional_key() {
    Jail::expect_with(|jail| {
        jail.set_env("GEMINI_API_KEY", "plain-key");
        jail.set_env("HOMEFIX_GEMINI__API_KEY", "prefixed-key");

        let config = HomefixConfig::load_from(Path::new(".")).expect("config loads");
        assert_eq!(config.gemini.api_key, "prefixed-key");
        Ok(())
    });
}
