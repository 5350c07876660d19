//! API key resolution from configuration and environment.

use super::types::TmdbConfig;

/// Environment variable that overrides `tmdb.api_key`.
pub const API_KEY_ENV_VAR: &str = "TMDB_API_KEY";

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building requests.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Result of resolving the API key.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    Configured(SecureString),
    Unconfigured { reason: String },
}

impl TmdbConfig {
    /// Resolve the API key, env var first, then the config file.
    ///
    /// Not cached: the env var is read on every call.
    pub fn resolve_credential(&self) -> CredentialStatus {
        let from_env = std::env::var(API_KEY_ENV_VAR).ok();
        resolve_from(from_env, self.api_key.as_deref())
    }
}

fn resolve_from(env_value: Option<String>, config_value: Option<&str>) -> CredentialStatus {
    if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
        return CredentialStatus::Configured(SecureString::new(key));
    }
    match config_value {
        Some(key) if !key.trim().is_empty() => {
            CredentialStatus::Configured(SecureString::new(key.to_string()))
        }
        _ => CredentialStatus::Unconfigured {
            reason: format!("set tmdb.api_key or {}", API_KEY_ENV_VAR),
        },
    }
}
