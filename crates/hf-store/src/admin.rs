//! Passphrase gate and admin-only operations.
//!
//! A successful [`AdminGate::login`] issues an [`AdminSession`]; every gated
//! operation takes it by reference and re-checks it against the gate's live
//! session table. Sessions live only in memory and expire after the
//! configured TTL.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use hf_config::AdminConfig;
use hf_core::entities::{AdminSession, TechnicianRecord};
use hf_core::enums::TechnicianStatus;
use hf_core::errors::CoreError;
use hf_core::validation::validate_fee;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::records::{Confirmation, RecordStore, TechnicianTransition};

const TOKEN_BYTES: usize = 16;

/// Filter for the admin technician list.
#[derive(Debug, Clone, Default)]
pub struct AdminQuery {
    /// Case-insensitive substring of name or city. Blank matches everything.
    pub search: Option<String>,
    /// `None` lists every status.
    pub status: Option<TechnicianStatus>,
}

/// Registration counters for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectoryStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
}

pub struct AdminGate<'s> {
    store: &'s RecordStore,
    ttl: Duration,
    /// token → expiry
    sessions: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl<'s> AdminGate<'s> {
    #[must_use]
    pub fn new(store: &'s RecordStore, config: &AdminConfig) -> Self {
        let secs = i64::try_from(config.session_ttl_secs).unwrap_or(i64::MAX);
        Self::with_ttl(store, Duration::try_seconds(secs).unwrap_or(Duration::MAX))
    }

    #[must_use]
    pub fn with_ttl(store: &'s RecordStore, ttl: Duration) -> Self {
        Self {
            store,
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Exchange the current passphrase for a session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AccessDenied` unless `passphrase` equals the stored
    /// passphrase exactly.
    pub async fn login(&self, passphrase: &str) -> Result<AdminSession, StoreError> {
        let settings = self.store.load_settings().await?;
        if passphrase != settings.admin_passphrase {
            tracing::warn!("admin login rejected");
            return Err(StoreError::AccessDenied);
        }
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        let token = new_token()?;
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, expiry| *expiry > issued_at);
        sessions.insert(token.clone(), expires_at);
        drop(sessions);
        tracing::info!(%expires_at, "admin session issued");
        Ok(AdminSession {
            token,
            issued_at,
            expires_at,
        })
    }

    /// End a session early.
    pub async fn logout(&self, session: &AdminSession) {
        self.sessions.lock().await.remove(&session.token);
    }

    /// Check that `session` is live.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AccessDenied` for a token this gate does not hold,
    /// or `StoreError::SessionExpired` once its TTL has passed.
    pub async fn verify(&self, session: &AdminSession) -> Result<(), StoreError> {
        let mut sessions = self.sessions.lock().await;
        let Some(expires_at) = sessions.get(&session.token).copied() else {
            return Err(StoreError::AccessDenied);
        };
        if Utc::now() >= expires_at {
            sessions.remove(&session.token);
            return Err(StoreError::SessionExpired);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Session errors, `NotFound`, or `StoreError` on database failure.
    pub async fn approve(
        &self,
        session: &AdminSession,
        id: &str,
    ) -> Result<TechnicianRecord, StoreError> {
        self.verify(session).await?;
        let record = self
            .store
            .update_technician(id, TechnicianTransition::Approve)
            .await?;
        tracing::info!(id, "technician approved");
        Ok(record)
    }

    /// # Errors
    ///
    /// Session errors, `NotFound`, `InvalidTransition` for an approved record,
    /// or `StoreError` on database failure.
    pub async fn reject(
        &self,
        session: &AdminSession,
        id: &str,
    ) -> Result<TechnicianRecord, StoreError> {
        self.verify(session).await?;
        let record = self
            .store
            .update_technician(id, TechnicianTransition::Reject)
            .await?;
        tracing::info!(id, "technician rejected");
        Ok(record)
    }

    /// Delete a registration. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Session errors or `StoreError` on database failure.
    pub async fn delete(
        &self,
        session: &AdminSession,
        id: &str,
        confirmation: Confirmation,
    ) -> Result<bool, StoreError> {
        self.verify(session).await?;
        let removed = self.store.delete_technician(id, confirmation).await?;
        tracing::info!(id, removed, "technician deleted");
        Ok(removed)
    }

    /// Stored registrations matching `query`, newest first.
    ///
    /// # Errors
    ///
    /// Session errors or `StoreError` on database failure.
    pub async fn admin_list(
        &self,
        session: &AdminSession,
        query: &AdminQuery,
    ) -> Result<Vec<TechnicianRecord>, StoreError> {
        self.verify(session).await?;
        let needle = query
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();
        let mut list: Vec<TechnicianRecord> = self
            .store
            .list_technicians()
            .await?
            .into_iter()
            .filter(|t| {
                needle.is_empty()
                    || t.name.to_lowercase().contains(&needle)
                    || t.city.to_lowercase().contains(&needle)
            })
            .filter(|t| query.status.is_none_or(|s| t.status == s))
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(list)
    }

    /// # Errors
    ///
    /// Session errors or `StoreError` on database failure.
    pub async fn stats(&self, session: &AdminSession) -> Result<DirectoryStats, StoreError> {
        self.verify(session).await?;
        let list = self.store.list_technicians().await?;
        let count = |status: TechnicianStatus| list.iter().filter(|t| t.status == status).count();
        Ok(DirectoryStats {
            total: list.len(),
            pending: count(TechnicianStatus::Pending),
            approved: count(TechnicianStatus::Approved),
        })
    }

    /// The registration fee technicians are asked to pay.
    ///
    /// # Errors
    ///
    /// Session errors or `StoreError` on database failure.
    pub async fn system_fee(&self, session: &AdminSession) -> Result<String, StoreError> {
        self.verify(session).await?;
        Ok(self.store.load_settings().await?.system_fee)
    }

    /// Store a new registration fee, normalized to `.` as decimal separator.
    ///
    /// # Errors
    ///
    /// Session errors, `CoreError::Validation` for a malformed fee, or
    /// `StoreError` on database failure.
    pub async fn set_system_fee(
        &self,
        session: &AdminSession,
        fee: &str,
    ) -> Result<String, StoreError> {
        self.verify(session).await?;
        let fee = validate_fee(fee)?;
        self.store
            .update_settings(|settings| settings.system_fee.clone_from(&fee))
            .await?;
        tracing::info!(%fee, "system fee updated");
        Ok(fee)
    }

    /// Replace the passphrase. The old value stops working immediately and
    /// every session other than `session` is revoked.
    ///
    /// # Errors
    ///
    /// Session errors, `CoreError::Validation` for a blank passphrase, or
    /// `StoreError` on database failure.
    pub async fn rotate_passphrase(
        &self,
        session: &AdminSession,
        new_passphrase: &str,
    ) -> Result<(), StoreError> {
        self.verify(session).await?;
        if new_passphrase.trim().is_empty() {
            return Err(CoreError::Validation("passphrase must not be blank".into()).into());
        }
        self.store
            .update_settings(|settings| settings.admin_passphrase = new_passphrase.to_string())
            .await?;
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|token, _| *token == session.token);
        tracing::info!(revoked = before - sessions.len(), "admin passphrase rotated");
        Ok(())
    }
}

fn new_token() -> Result<String, StoreError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| StoreError::Entropy(e.to_string()))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}
