use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// Where the durable key-value store lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Falls back to `dirs::data_dir()/cinetrack`.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Movie metadata API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// API root (e.g., "https://api.themoviedb.org/3").
    #[serde(default = "default_tmdb_base_url")]
    pub base_url: String,
    /// Image CDN root; a size segment and the image path are appended.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// API key. The `TMDB_API_KEY` env var takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            base_url: default_tmdb_base_url(),
            image_base_url: default_image_base_url(),
            api_key: None,
            timeout_seconds: default_timeout(),
        }
    }
}

impl StorageConfig {
    /// Resolved data directory.
    pub fn resolve_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("cinetrack")
        })
    }
}
