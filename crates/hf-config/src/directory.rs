//! Technician directory configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DirectoryConfig {
    /// List the built-in featured technicians ahead of stored records.
    #[serde(default)]
    pub include_featured: bool,

    /// Address that receives new registration notices. Empty disables them.
    #[serde(default)]
    pub admin_email: String,
}
