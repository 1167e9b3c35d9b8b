//! Admin gate configuration.

use serde::{Deserialize, Serialize};

/// Lifetime of an admin session, in seconds.
const fn default_session_ttl_secs() -> u64 {
    15 * 60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            session_ttl_secs: default_session_ttl_secs(),
        }
    }
}
