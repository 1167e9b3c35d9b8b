//! Fee and admin passphrase scalars.

use hf_core::entities::{DEFAULT_ADMIN_PASSPHRASE, DEFAULT_SYSTEM_FEE, Settings};

use crate::error::StoreError;
use crate::records::RecordStore;
use crate::{KEY_ADMIN_PASSWORD, KEY_SYSTEM_FEE};

impl RecordStore {
    /// Current settings, read from the store once and cached afterwards.
    /// Absent values fall back to the compiled-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on database failure.
    pub async fn load_settings(&self) -> Result<Settings, StoreError> {
        let mut cache = self.settings.lock().await;
        self.cached_settings(&mut cache).await
    }

    /// Apply `change` to the current settings and persist every scalar it
    /// touched. The settings mutex is held from read to write, so concurrent
    /// updates of different scalars never overwrite each other.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` on database failure; the cache is left as it was.
    pub(crate) async fn update_settings<F>(&self, change: F) -> Result<Settings, StoreError>
    where
        F: FnOnce(&mut Settings),
    {
        let mut cache = self.settings.lock().await;
        let before = self.cached_settings(&mut cache).await?;
        let mut after = before.clone();
        change(&mut after);

        if after.system_fee != before.system_fee {
            self.db().kv_set(KEY_SYSTEM_FEE, &after.system_fee).await?;
        }
        if after.admin_passphrase != before.admin_passphrase {
            self.db()
                .kv_set(KEY_ADMIN_PASSWORD, &after.admin_passphrase)
                .await?;
        }
        *cache = Some(after.clone());
        Ok(after)
    }

    async fn cached_settings(&self, cache: &mut Option<Settings>) -> Result<Settings, StoreError> {
        if let Some(settings) = cache.as_ref() {
            return Ok(settings.clone());
        }
        let settings = Settings {
            system_fee: self
                .read_scalar(KEY_SYSTEM_FEE)
                .await?
                .unwrap_or_else(|| DEFAULT_SYSTEM_FEE.to_string()),
            admin_passphrase: self
                .read_scalar(KEY_ADMIN_PASSWORD)
                .await?
                .unwrap_or_else(|| DEFAULT_ADMIN_PASSPHRASE.to_string()),
        };
        *cache = Some(settings.clone());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn absent_settings_use_defaults() {
        let store = RecordStore::in_memory().await.unwrap();
        assert_eq!(store.load_settings().await.unwrap(), Settings::default());
    }

    #[tokio::test]
    async fn stored_scalars_are_bare_strings() {
        let store = RecordStore::in_memory().await.unwrap();
        store
            .update_settings(|settings| {
                settings.system_fee = "59.90".into();
                settings.admin_passphrase = "novasenha".into();
            })
            .await
            .unwrap();
        assert_eq!(
            store.db().kv_get(KEY_SYSTEM_FEE).await.unwrap().as_deref(),
            Some("59.90")
        );
        assert_eq!(
            store
                .db()
                .kv_get(KEY_ADMIN_PASSWORD)
                .await
                .unwrap()
                .as_deref(),
            Some("novasenha")
        );
    }

    #[tokio::test]
    async fn preexisting_values_are_loaded_once() {
        let store = RecordStore::in_memory().await.unwrap();
        store.db().kv_set(KEY_SYSTEM_FEE, "35.00").await.unwrap();
        assert_eq!(store.load_settings().await.unwrap().system_fee, "35.00");

        // cached: raw writes behind the store's back are not observed
        store.db().kv_set(KEY_SYSTEM_FEE, "99.00").await.unwrap();
        assert_eq!(store.load_settings().await.unwrap().system_fee, "35.00");
    }

    #[tokio::test]
    async fn update_writes_only_changed_scalars() {
        let store = RecordStore::in_memory().await.unwrap();
        let updated = store
            .update_settings(|settings| settings.system_fee = "10.00".into())
            .await
            .unwrap();
        assert_eq!(updated.admin_passphrase, DEFAULT_ADMIN_PASSPHRASE);
        assert_eq!(
            store.db().kv_get(KEY_SYSTEM_FEE).await.unwrap().as_deref(),
            Some("10.00")
        );
        assert_eq!(store.db().kv_get(KEY_ADMIN_PASSWORD).await.unwrap(), None);
    }

    #[tokio::test]
    async fn blank_passphrase_falls_back_to_default() {
        let store = RecordStore::in_memory().await.unwrap();
        store.db().kv_set(KEY_ADMIN_PASSWORD, "  ").await.unwrap();
        assert_eq!(
            store.load_settings().await.unwrap().admin_passphrase,
            DEFAULT_ADMIN_PASSPHRASE
        );
    }
}
