//! Diagnosis history: newest first, user-managed.

use hf_core::entities::{Diagnosis, SavedDiagnosisRecord};
use hf_core::enums::ApplianceKind;
use hf_core::ids::PREFIX_DIAGNOSIS;

use super::now_millis;
use crate::error::StoreError;
use crate::records::{Confirmation, RecordStore};
use crate::KEY_HISTORY;

const ENTITY: &str = "diagnosis";

impl RecordStore {
    /// Save a diagnosis at the head of the history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on database failure.
    pub async fn save_diagnosis(
        &self,
        appliance: ApplianceKind,
        problem: &str,
        diagnosis: &Diagnosis,
    ) -> Result<SavedDiagnosisRecord, StoreError> {
        let _guard = self.history.lock().await;
        let record = SavedDiagnosisRecord {
            id: self.db().generate_id(PREFIX_DIAGNOSIS).await?,
            timestamp: now_millis(),
            appliance,
            problem: problem.to_string(),
            diagnosis: diagnosis.clone(),
        };
        let mut history: Vec<SavedDiagnosisRecord> = self.read_list(KEY_HISTORY).await?;
        history.insert(0, record.clone());
        self.write_list(KEY_HISTORY, &history).await?;
        tracing::debug!(id = %record.id, %appliance, "diagnosis saved");
        Ok(record)
    }

    /// All saved diagnoses, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on database failure.
    pub async fn list_history(&self) -> Result<Vec<SavedDiagnosisRecord>, StoreError> {
        let _guard = self.history.lock().await;
        self.read_list(KEY_HISTORY).await
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` (wrapped) for an unknown id.
    pub async fn get_history(&self, id: &str) -> Result<SavedDiagnosisRecord, StoreError> {
        self.list_history()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// Delete one saved diagnosis. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on database failure.
    pub async fn delete_history(
        &self,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<bool, StoreError> {
        let _guard = self.history.lock().await;
        let removed = self
            .remove_where(
                KEY_HISTORY,
                |r: &SavedDiagnosisRecord| r.id == id,
                confirmation,
            )
            .await?;
        Ok(removed > 0)
    }

    /// Drop the whole history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on database failure.
    pub async fn clear_history(&self, _confirmation: Confirmation) -> Result<(), StoreError> {
        let _guard = self.history.lock().await;
        self.db().kv_delete(KEY_HISTORY).await?;
        tracing::debug!("history cleared");
        Ok(())
    }
}
