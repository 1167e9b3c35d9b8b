use hf_config::HomefixConfig;

/// Keys figment cannot map into `gemini.*` because they use one underscore.
const NEAR_MISS_PREFIX: &str = "HOMEFIX_GEMINI_";
const NESTED_PREFIX: &str = "HOMEFIX_GEMINI__";

/// Warn when no Gemini key was loaded but the env looks like someone tried.
pub fn warn_unconfigured(config: &HomefixConfig) {
    let keys: Vec<String> = std::env::vars().map(|(key, _)| key).collect();
    if let Some(key) = near_miss_gemini_key(config, &keys) {
        tracing::warn!(
            key,
            "Gemini is not configured; nested keys need a double underscore, e.g. HOMEFIX_GEMINI__API_KEY"
        );
    }
}

fn near_miss_gemini_key<'a>(config: &HomefixConfig, keys: &'a [String]) -> Option<&'a str> {
    if config.gemini.is_configured() {
        return None;
    }
    keys.iter()
        .map(String::as_str)
        .find(|key| key.starts_with(NEAR_MISS_PREFIX) && !key.starts_with(NESTED_PREFIX))
}
