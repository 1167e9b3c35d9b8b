use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SYSTEM_FEE: &str = "49.90";
pub const DEFAULT_ADMIN_PASSPHRASE: &str = "admin123";

/// Process-wide scalars: the technician registration fee and the admin passphrase.
///
/// Loaded from the record store on first read and passed explicitly to the
/// components that need it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub system_fee: String,
    pub admin_passphrase: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            system_fee: DEFAULT_SYSTEM_FEE.to_string(),
            admin_passphrase: DEFAULT_ADMIN_PASSPHRASE.to_string(),
        }
    }
}
