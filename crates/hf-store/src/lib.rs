//! # hf-store
//!
//! libSQL-backed local persistence for homefix.
//!
//! Every logical table lives under a fixed key in a single `kv_store` table:
//!
//! | Key | Value |
//! |---|---|
//! | `diagnosis_history` | JSON list of saved diagnoses, newest first |
//! | `technicians` | JSON list of technician records, registration order |
//! | `system_fee` | decimal string |
//! | `admin_password` | string |
//!
//! [`RecordStore`] owns the handle and serializes read-modify-write sequences
//! per table. [`Directory`] and [`AdminGate`] are built on top of it.

pub mod admin;
pub mod directory;
pub mod error;
mod migrations;
pub mod records;
mod repos;

pub use admin::{AdminGate, AdminQuery, DirectoryStats};
pub use directory::{Directory, featured_technicians};
pub use error::StoreError;
pub use records::{Confirmation, RecordStore, TechnicianTransition};

use chrono::Utc;
use libsql::Builder;

pub const KEY_HISTORY: &str = "diagnosis_history";
pub const KEY_TECHNICIANS: &str = "technicians";
pub const KEY_SYSTEM_FEE: &str = "system_fee";
pub const KEY_ADMIN_PASSWORD: &str = "admin_password";

/// Raw database handle: id generation and key-value access.
pub struct HfDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl HfDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let hf_db = Self { db, conn };
        hf_db.run_migrations().await?;
        Ok(hf_db)
    }

    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"dgn-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, StoreError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(StoreError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut rows = self
            .conn
            .query("SELECT value FROM kv_store WHERE key = ?1", [key])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    /// Insert or replace the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the statement fails.
    pub async fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                libsql::params![key, value, Utc::now().to_rfc3339()],
            )
            .await?;
        Ok(())
    }

    /// Remove `key`. Returns whether a row was deleted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the statement fails.
    pub async fn kv_delete(&self, key: &str) -> Result<bool, StoreError> {
        let affected = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", [key])
            .await?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> HfDb {
        HfDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_kv_table() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["kv_store"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("dgn").await.unwrap();
        assert!(id.starts_with("dgn-"), "ID should start with 'dgn-': {id}");
        assert_eq!(id.len(), 12);
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn kv_set_overwrites_and_delete_removes() {
        let db = test_db().await;
        assert_eq!(db.kv_get(KEY_SYSTEM_FEE).await.unwrap(), None);

        db.kv_set(KEY_SYSTEM_FEE, "49.90").await.unwrap();
        db.kv_set(KEY_SYSTEM_FEE, "59.90").await.unwrap();
        assert_eq!(
            db.kv_get(KEY_SYSTEM_FEE).await.unwrap().as_deref(),
            Some("59.90")
        );

        assert!(db.kv_delete(KEY_SYSTEM_FEE).await.unwrap());
        assert!(!db.kv_delete(KEY_SYSTEM_FEE).await.unwrap());
        assert_eq!(db.kv_get(KEY_SYSTEM_FEE).await.unwrap(), None);
    }
}
