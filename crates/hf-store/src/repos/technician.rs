//! Technician registry: registration order, admin-mutated.

use hf_core::entities::{NewTechnician, TechnicianRecord};
use hf_core::enums::TechnicianStatus;
use hf_core::errors::CoreError;
use hf_core::ids::PREFIX_TECHNICIAN;

use super::now_millis;
use crate::error::StoreError;
use crate::records::{Confirmation, RecordStore, TechnicianTransition};
use crate::KEY_TECHNICIANS;

const ENTITY: &str = "technician";

impl RecordStore {
    /// Append a pending, unverified registration. The city is case-folded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on database failure.
    pub async fn register_technician(
        &self,
        form: NewTechnician,
    ) -> Result<TechnicianRecord, StoreError> {
        let _guard = self.technicians.lock().await;
        let record = TechnicianRecord {
            id: self.db().generate_id(PREFIX_TECHNICIAN).await?,
            name: form.name,
            phone: form.phone,
            city: form.city.trim().to_lowercase(),
            specialties: form.specialties,
            is_verified: false,
            status: TechnicianStatus::Pending,
            payment_proof: form.payment_proof,
            created_at: now_millis(),
        };
        let mut technicians: Vec<TechnicianRecord> = self.read_list(KEY_TECHNICIANS).await?;
        technicians.push(record.clone());
        self.write_list(KEY_TECHNICIANS, &technicians).await?;
        tracing::debug!(id = %record.id, city = %record.city, "technician registered");
        Ok(record)
    }

    /// All stored technicians in registration order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on database failure.
    pub async fn list_technicians(&self) -> Result<Vec<TechnicianRecord>, StoreError> {
        let _guard = self.technicians.lock().await;
        self.read_list(KEY_TECHNICIANS).await
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) for an unknown id.
    pub async fn get_technician(&self, id: &str) -> Result<TechnicianRecord, StoreError> {
        self.list_technicians()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// Apply an approval transition to one record. Re-applying the state a
    /// record is already in is a no-op.
    pub(crate) async fn update_technician(
        &self,
        id: &str,
        transition: TechnicianTransition,
    ) -> Result<TechnicianRecord, StoreError> {
        let _guard = self.technicians.lock().await;
        let mut technicians: Vec<TechnicianRecord> = self.read_list(KEY_TECHNICIANS).await?;
        let record = technicians
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;

        let (target, verified) = match transition {
            TechnicianTransition::Approve => (TechnicianStatus::Approved, true),
            TechnicianTransition::Reject => (TechnicianStatus::Rejected, false),
        };
        if record.status == target {
            return Ok(record.clone());
        }
        if !record.status.can_transition_to(target) {
            return Err(CoreError::InvalidTransition {
                entity_type: ENTITY.into(),
                id: id.into(),
                from: record.status.to_string(),
                to: target.to_string(),
            }
            .into());
        }
        record.status = target;
        record.is_verified = verified;
        let updated = record.clone();
        self.write_list(KEY_TECHNICIANS, &technicians).await?;
        Ok(updated)
    }

    /// Remove one record. Returns whether it existed.
    pub(crate) async fn delete_technician(
        &self,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<bool, StoreError> {
        let _guard = self.technicians.lock().await;
        let removed = self
            .remove_where(
                KEY_TECHNICIANS,
                |t: &TechnicianRecord| t.id == id,
                confirmation,
            )
            .await?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::enums::ApplianceKind;
    use pretty_assertions::assert_eq;

    fn form(name: &str, city: &str) -> NewTechnician {
        NewTechnician {
            name: name.into(),
            phone: "11999998888".into(),
            city: city.into(),
            specialties: vec![ApplianceKind::Lavadora],
            payment_proof: Some("data:image/png;base64,iVBORw0KGgo=".into()),
        }
    }

    #[tokio::test]
    async fn registration_is_pending_and_case_folded() {
        let store = RecordStore::in_memory().await.unwrap();
        let tech = store
            .register_technician(form("Carlos", "  São Paulo "))
            .await
            .unwrap();
        assert_eq!(tech.status, TechnicianStatus::Pending);
        assert!(!tech.is_verified);
        assert_eq!(tech.city, "são paulo");
        assert!(tech.id.starts_with("tec-"));
        assert_eq!(store.get_technician(&tech.id).await.unwrap(), tech);
    }

    #[tokio::test]
    async fn approve_then_reject_is_invalid() {
        let store = RecordStore::in_memory().await.unwrap();
        let tech = store.register_technician(form("Ana", "Rio")).await.unwrap();
        store
            .update_technician(&tech.id, TechnicianTransition::Approve)
            .await
            .unwrap();
        let err = store
            .update_technician(&tech.id, TechnicianTransition::Reject)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::InvalidTransition { .. })
        ));
    }

    #[tokio::test]
    async fn rejected_can_be_approved_later() {
        let store = RecordStore::in_memory().await.unwrap();
        let tech = store.register_technician(form("Ana", "Rio")).await.unwrap();
        let rejected = store
            .update_technician(&tech.id, TechnicianTransition::Reject)
            .await
            .unwrap();
        assert_eq!(rejected.status, TechnicianStatus::Rejected);
        assert!(!rejected.is_verified);

        let approved = store
            .update_technician(&tech.id, TechnicianTransition::Approve)
            .await
            .unwrap();
        assert_eq!(approved.status, TechnicianStatus::Approved);
        assert!(approved.is_verified);
    }

    #[tokio::test]
    async fn transition_leaves_other_fields_untouched() {
        let store = RecordStore::in_memory().await.unwrap();
        let tech = store.register_technician(form("Ana", "Rio")).await.unwrap();
        let approved = store
            .update_technician(&tech.id, TechnicianTransition::Approve)
            .await
            .unwrap();
        assert_eq!(
            TechnicianRecord {
                status: TechnicianStatus::Pending,
                is_verified: false,
                ..approved
            },
            tech
        );
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = RecordStore::in_memory().await.unwrap();
        let err = store
            .update_technician("tec-00000000", TechnicianTransition::Approve)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Core(CoreError::NotFound { .. })));
        assert!(
            !store
                .delete_technician("tec-00000000", Confirmation::confirmed())
                .await
                .unwrap()
        );
    }
}
