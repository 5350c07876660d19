//! Persistence adapter over an injected key-value store.
//!
//! ## Keys
//!
//! ```text
//! @movieapp_auth       → Session JSON
//! @movieapp_theme      → "dark" | "light"
//! @movieapp_watchlist  → [Movie, ...]
//! @movieapp_users      → [User, ...]
//! ```
//!
//! Values are JSON text. There is no schema versioning: a value that no
//! longer decodes is reported as [`StorageError::Decode`] and hydration
//! treats it as absent.

mod error;
mod file;
pub mod keys;
mod memory;
mod persistence;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::Persistence;

use async_trait::async_trait;

/// Durable string key-value store.
///
/// Implementations must make `set` overwrite any prior value and `remove`
/// idempotent.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the name of this store for logging.
    fn name(&self) -> &'static str;

    /// Read the raw value under `key`, `None` if it was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
