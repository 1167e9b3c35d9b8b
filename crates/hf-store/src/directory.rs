//! Public technician search.

use std::sync::LazyLock;

use chrono::DateTime;
use hf_config::DirectoryConfig;
use hf_core::entities::TechnicianRecord;
use hf_core::enums::{ApplianceKind, TechnicianStatus};

use crate::error::StoreError;
use crate::records::RecordStore;

static FEATURED: LazyLock<Vec<TechnicianRecord>> = LazyLock::new(|| {
    let created_at = DateTime::UNIX_EPOCH;
    vec![
        TechnicianRecord {
            id: "featured-1".into(),
            name: "Carlos Manutenção".into(),
            phone: "11999998888".into(),
            city: "são paulo".into(),
            specialties: vec![ApplianceKind::Lavadora, ApplianceKind::Geladeira],
            is_verified: true,
            status: TechnicianStatus::Approved,
            payment_proof: None,
            created_at,
        },
        TechnicianRecord {
            id: "featured-2".into(),
            name: "Ana Ar-Condicionado".into(),
            phone: "21988887777".into(),
            city: "rio de janeiro".into(),
            specialties: vec![ApplianceKind::ArCondicionado],
            is_verified: true,
            status: TechnicianStatus::Approved,
            payment_proof: None,
            created_at,
        },
    ]
});

/// Built-in partner technicians, shown only when enabled in configuration.
#[must_use]
pub fn featured_technicians() -> &'static [TechnicianRecord] {
    &FEATURED
}

/// Approved technicians filtered by city and specialty.
pub struct Directory<'s> {
    store: &'s RecordStore,
    include_featured: bool,
}

impl<'s> Directory<'s> {
    #[must_use]
    pub const fn new(store: &'s RecordStore, config: &DirectoryConfig) -> Self {
        Self {
            store,
            include_featured: config.include_featured,
        }
    }

    /// Approved technicians whose city contains `city` (case-insensitive),
    /// narrowed to `specialty` when given. Results keep store order, after
    /// the featured entries when those are enabled.
    ///
    /// A blank `city` returns nothing without reading the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on database failure.
    pub async fn search(
        &self,
        city: &str,
        specialty: Option<ApplianceKind>,
    ) -> Result<Vec<TechnicianRecord>, StoreError> {
        let needle = city.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }
        let matches = |t: &TechnicianRecord| {
            t.status == TechnicianStatus::Approved
                && t.city.to_lowercase().contains(&needle)
                && specialty.is_none_or(|s| t.has_specialty(s))
        };

        let mut results: Vec<TechnicianRecord> = if self.include_featured {
            FEATURED.iter().filter(|&t| matches(t)).cloned().collect()
        } else {
            Vec::new()
        };
        results.extend(
            self.store
                .list_technicians()
                .await?
                .into_iter()
                .filter(|t| matches(t)),
        );
        tracing::debug!(city = %needle, ?specialty, hits = results.len(), "directory search");
        Ok(results)
    }
}
