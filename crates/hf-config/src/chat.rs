//! Chat assistant configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of the conversation is sent to the model on each chat turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransmissionScope {
    /// The whole role-tagged history, greeting included.
    #[default]
    FullHistory,
    /// Only the newest user turn.
    LastTurn,
}

impl fmt::Display for TransmissionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FullHistory => "full_history",
            Self::LastTurn => "last_turn",
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub transmission: TransmissionScope,
}
