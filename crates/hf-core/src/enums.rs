//! Closed enums for appliances, cost tiers, technician status, and chat roles.
//!
//! Wire names follow the persisted layout: appliance ids are kebab-case,
//! cost levels keep their Portuguese display values, statuses are lowercase.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ApplianceKind
// ---------------------------------------------------------------------------

/// The closed set of appliances the catalog covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ApplianceKind {
    Lavadora,
    Geladeira,
    ArCondicionado,
    AirFryer,
    Microondas,
    FornoEletrico,
}

impl ApplianceKind {
    pub const ALL: [Self; 6] = [
        Self::Lavadora,
        Self::Geladeira,
        Self::ArCondicionado,
        Self::AirFryer,
        Self::Microondas,
        Self::FornoEletrico,
    ];

    /// Return the identifier used in catalog keys and persisted JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lavadora => "lavadora",
            Self::Geladeira => "geladeira",
            Self::ArCondicionado => "ar-condicionado",
            Self::AirFryer => "air-fryer",
            Self::Microondas => "microondas",
            Self::FornoEletrico => "forno-eletrico",
        }
    }
}

impl fmt::Display for ApplianceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplianceKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == needle)
            .ok_or_else(|| CoreError::Validation(format!("unknown appliance '{s}'")))
    }
}

// ---------------------------------------------------------------------------
// CostLevel
// ---------------------------------------------------------------------------

/// Repair cost tier shown alongside the free-text cost range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CostLevel {
    #[serde(rename = "Baixo")]
    Low,
    #[serde(rename = "Médio")]
    Medium,
    #[serde(rename = "Alto")]
    High,
}

impl CostLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Baixo",
            Self::Medium => "Médio",
            Self::High => "Alto",
        }
    }
}

impl fmt::Display for CostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TechnicianStatus
// ---------------------------------------------------------------------------

/// Approval status of a technician registration.
///
/// ```text
/// pending → approved
///         → rejected → approved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TechnicianStatus {
    Pending,
    Approved,
    Rejected,
}

impl TechnicianStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Rejected => &[Self::Approved],
            Self::Approved => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for TechnicianStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChatRole
// ---------------------------------------------------------------------------

/// Author of a chat turn. `Model` is the wire name the generative service uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
