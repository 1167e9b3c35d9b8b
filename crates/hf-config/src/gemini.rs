//! Gemini generative API configuration.

use serde::{Deserialize, Serialize};

/// Model used for the two structured (JSON mode) calls.
fn default_model() -> String {
    "gemini-3-flash-preview".into()
}

/// Model used for the conversational assistant.
fn default_chat_model() -> String {
    "gemini-3-pro-preview".into()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".into()
}

/// Transport-level request timeout, in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Also read from `GEMINI_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Base URL up to and including the API version segment.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            chat_model: default_chat_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiConfig {
    /// Check if an API key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Full `generateContent` URL for `model`.
    #[must_use]
    pub fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{model}:generateContent",
            self.endpoint.trim_end_matches('/')
        )
    }
}
