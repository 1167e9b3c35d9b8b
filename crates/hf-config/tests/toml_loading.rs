//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use hf_config::{HomefixConfig, TransmissionScope};
use std::path::{Path, PathBuf};

#[test]
fn loads_gemini_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "toml-key"
model = "gemini-test"
chat_model = "gemini-chat-test"
endpoint = "http://localhost:9999/v1beta"
timeout_secs = 5
"#,
        )?;

        let config: HomefixConfig =
            Figment::from(Serialized::defaults(HomefixConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.gemini.api_key, "toml-key");
        assert_eq!(config.gemini.model, "gemini-test");
        assert_eq!(config.gemini.chat_model, "gemini-chat-test");
        assert_eq!(config.gemini.endpoint, "http://localhost:9999/v1beta");
        assert_eq!(config.gemini.timeout_secs, 5);
        assert!(config.gemini.is_configured());
        Ok(())
    });
}

#[test]
fn loads_remaining_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
path = "/var/lib/homefix/records.db"

[chat]
transmission = "last_turn"

[admin]
session_ttl_secs = 60

[directory]
include_featured = true
"#,
        )?;

        let config: HomefixConfig =
            Figment::from(Serialized::defaults(HomefixConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(
            config.store.path,
            PathBuf::from("/var/lib/homefix/records.db")
        );
        assert_eq!(config.chat.transmission, TransmissionScope::LastTurn);
        assert_eq!(config.admin.session_ttl_secs, 60);
        assert!(config.directory.include_featured);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[gemini]
api_key = "only-key"
"#,
        )?;

        let config: HomefixConfig =
            Figment::from(Serialized::defaults(HomefixConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract()?;

        assert_eq!(config.gemini.model, "gemini-3-flash-preview");
        assert_eq!(config.admin.session_ttl_secs, 900);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load_from() {
    Jail::expect_with(|jail| {
        jail.create_dir(".homefix")?;
        jail.create_file(
            ".homefix/config.toml",
            r#"
[chat]
transmission = "last_turn"
"#,
        )?;

        let config = HomefixConfig::load_from(Path::new(".")).expect("config loads");
        assert_eq!(config.chat.transmission, TransmissionScope::LastTurn);
        Ok(())
    });
}

#[test]
fn unknown_transmission_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".homefix")?;
        jail.create_file(
            ".homefix/config.toml",
            r#"
[chat]
transmission = "everything"
"#,
        )?;

        assert!(HomefixConfig::load_from(Path::new(".")).is_err());
        Ok(())
    });
}

#[test]
fn out_of_range_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_dir(".homefix")?;
        jail.create_file(
            ".homefix/config.toml",
            r#"
[gemini]
timeout_secs = 0
"#,
        )?;

        let err = HomefixConfig::load_from(Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("gemini.timeout_secs"));
        Ok(())
    });
}
