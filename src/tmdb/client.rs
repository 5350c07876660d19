//! HTTP client for the trending endpoint.

use std::time::{Duration, Instant};

use reqwest::{Client, Url};

use crate::config::{CredentialStatus, TmdbConfig};

use super::error::TmdbError;
use super::types::{Movie, TrendingPage};

/// Client for the movie metadata API.
pub struct TmdbClient {
    client: Client,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Create a client with the configured request timeout.
    pub fn new(config: TmdbConfig) -> Result<Self, TmdbError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn image_base_url(&self) -> &str {
        &self.config.image_base_url
    }

    /// Fetch this week's trending movies.
    ///
    /// No retry: a failure is returned to the caller as-is.
    pub async fn trending(&self) -> Result<Vec<Movie>, TmdbError> {
        let api_key = match self.config.resolve_credential() {
            CredentialStatus::Configured(key) => key,
            CredentialStatus::Unconfigured { reason } => {
                return Err(TmdbError::MissingApiKey { reason });
            }
        };

        let endpoint = format!(
            "{}/trending/movie/week",
            self.config.base_url.trim_end_matches('/')
        );
        let url = Url::parse_with_params(&endpoint, &[("api_key", api_key.expose())]).map_err(
            |e| TmdbError::InvalidUrl {
                url: endpoint.clone(),
                message: e.to_string(),
            },
        )?;

        tracing::debug!(url = %endpoint, "Fetching trending movies");

        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            tracing::error!(status = %status, latency_ms, "Trending request failed");
            return Err(TmdbError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let page: TrendingPage = response.json().await?;
        let movies = page.into_movies();
        tracing::info!(count = movies.len(), latency_ms, "Fetched trending movies");
        Ok(movies)
    }
}
