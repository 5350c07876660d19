use thiserror::Error;

/// Errors from the movie metadata API.
#[derive(Debug, Error)]
pub enum TmdbError {
    /// No API key in config or environment.
    #[error("TMDB API key not configured: {reason}")]
    MissingApiKey { reason: String },

    /// Building the request URL failed.
    #[error("Invalid TMDB URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Transport failure or undecodable body.
    #[error("TMDB request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error("TMDB returned {status}: {message}")]
    Status { status: u16, message: String },
}
