use serde::Serialize;

use crate::enums::ApplianceKind;

/// A catalog appliance. Static, defined at build time.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Appliance {
    pub id: ApplianceKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// A selectable symptom, either appliance-specific or from the generic set.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Symptom {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}
