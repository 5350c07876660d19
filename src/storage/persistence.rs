//! Typed JSON access on top of a [`KeyValueStore`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{KeyValueStore, StorageError};

/// Serializing wrapper around the injected store.
///
/// Cloning is cheap; every clone talks to the same underlying store.
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Name of the underlying store.
    pub fn backend_name(&self) -> &'static str {
        self.store.name()
    }

    /// Serialize `value` and write it under `key`, overwriting any prior value.
    pub async fn save<T>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, raw).await?;
        tracing::debug!(key, store = self.store.name(), "Saved value");
        Ok(())
    }

    /// Read and deserialize the value under `key`.
    ///
    /// Returns `Ok(None)` when the key was never written or holds an empty
    /// string.
    pub async fn load<T>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            })
    }

    /// Delete `key`. Idempotent.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key).await?;
        tracing::debug!(key, store = self.store.name(), "Removed key");
        Ok(())
    }

    /// Hydration helper: like [`Persistence::load`], but failures are logged
    /// and reported as absent.
    pub async fn load_or_warn<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        match self.load(key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "Failed to read persisted value, using default");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn persistence() -> (Arc<MemoryStore>, Persistence) {
        let store = Arc::new(MemoryStore::new());
        let persistence = Persistence::new(store.clone());
        (store, persistence)
    }

    #[tokio::test]
    async fn load_of_unwritten_key_is_absent() {
        let (_, persistence) = persistence();
        let value: Option<Vec<u64>> = persistence.load("missing").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn save_overwrites_previous_value() {
        let (store, persistence) = persistence();
        persistence.save("k", &vec![1u64, 2]).await.unwrap();
        persistence.save("k", &vec![3u64]).await.unwrap();

        assert_eq!(store.raw("k").as_deref(), Some("[3]"));
        let value: Option<Vec<u64>> = persistence.load("k").await.unwrap();
        assert_eq!(value, Some(vec![3]));
    }

    #[tokio::test]
    async fn corrupted_value_is_a_decode_error() {
        let (store, persistence) = persistence();
        store.insert_raw("k", "{not json");

        let err = persistence.load::<Vec<u64>>("k").await.unwrap_err();
        assert!(matches!(err, StorageError::Decode { .. }));
        assert!(persistence.load_or_warn::<Vec<u64>>("k").await.is_none());
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let (store, persistence) = persistence();
        persistence.save("k", "v").await.unwrap();
        persistence.remove("k").await.unwrap();
        persistence.remove("k").await.unwrap();
        assert!(!store.contains("k"));
    }
}
