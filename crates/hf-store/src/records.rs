//! The record store: typed tables over the key-value handle.
//!
//! Each logical table has its own async mutex. Every read-modify-write holds
//! that mutex for its whole duration, so concurrent writers on a
//! multi-threaded runtime never lose each other's updates.

use std::path::Path;

use hf_core::entities::Settings;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::HfDb;
use crate::error::StoreError;

/// Proof that the user confirmed a destructive action.
///
/// Callers construct it only after asking; every delete or clear takes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation(());

impl Confirmation {
    #[must_use]
    pub const fn confirmed() -> Self {
        Self(())
    }
}

/// The only mutations a stored technician record admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechnicianTransition {
    /// status → approved, `isVerified` → true.
    Approve,
    /// status → rejected, `isVerified` → false.
    Reject,
}

pub struct RecordStore {
    db: HfDb,
    pub(crate) history: Mutex<()>,
    pub(crate) technicians: Mutex<()>,
    /// Lazily loaded on first read; `None` until then.
    pub(crate) settings: Mutex<Option<Settings>>,
}

impl RecordStore {
    /// Open (or create) the store at `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the directory or database cannot be created.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = HfDb::open_local(&path.to_string_lossy()).await?;
        tracing::debug!(path = %path.display(), "record store opened");
        Ok(Self::from_db(db))
    }

    /// In-memory store for tests and throwaway sessions.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be created.
    pub async fn in_memory() -> Result<Self, StoreError> {
        Ok(Self::from_db(HfDb::open_local(":memory:").await?))
    }

    #[must_use]
    pub fn from_db(db: HfDb) -> Self {
        Self {
            db,
            history: Mutex::new(()),
            technicians: Mutex::new(()),
            settings: Mutex::new(None),
        }
    }

    #[must_use]
    pub const fn db(&self) -> &HfDb {
        &self.db
    }

    /// Read a list table. Absent and unparseable values both read as empty.
    pub(crate) async fn read_list<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Vec<T>, StoreError> {
        let Some(raw) = self.db.kv_get(key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(error) => {
                tracing::warn!(key, %error, "corrupt stored table, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    pub(crate) async fn write_list<T: Serialize>(
        &self,
        key: &str,
        list: &[T],
    ) -> Result<(), StoreError> {
        let raw = serde_json::to_string(list)?;
        self.db.kv_set(key, &raw).await
    }

    /// Read a bare scalar. Absent and blank values read as `None`.
    pub(crate) async fn read_scalar(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .db
            .kv_get(key)
            .await?
            .filter(|value| !value.trim().is_empty()))
    }

    /// Drop every element matching `predicate`, preserving the order of the
    /// rest. Caller must hold the table's mutex. Returns how many were removed.
    pub(crate) async fn remove_where<T, F>(
        &self,
        key: &str,
        predicate: F,
        _confirmation: Confirmation,
    ) -> Result<usize, StoreError>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let mut list: Vec<T> = self.read_list(key).await?;
        let before = list.len();
        list.retain(|item| !predicate(item));
        let removed = before - list.len();
        if removed > 0 {
            self.write_list(key, &list).await?;
        }
        Ok(removed)
    }
}
