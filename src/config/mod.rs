pub mod credentials;
pub mod loader;
pub mod types;

pub use credentials::{CredentialStatus, SecureString, API_KEY_ENV_VAR};
pub use loader::ConfigError;
pub use types::{Config, StorageConfig, TmdbConfig};
