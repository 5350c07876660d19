//! Discover feed: the last successfully fetched trending list.

use parking_lot::RwLock;

use super::client::TmdbClient;
use super::types::{Movie, MovieId};

/// Holds the trending list shown on the discover view.
///
/// A failed refresh keeps the previous list (empty before the first
/// success) and only logs a warning.
pub struct DiscoverFeed {
    client: TmdbClient,
    movies: RwLock<Vec<Movie>>,
}

impl DiscoverFeed {
    pub fn new(client: TmdbClient) -> Self {
        Self {
            client,
            movies: RwLock::new(Vec::new()),
        }
    }

    pub fn client(&self) -> &TmdbClient {
        &self.client
    }

    /// Re-fetch the trending list. Returns `true` if the list was replaced.
    pub async fn refresh(&self) -> bool {
        match self.client.trending().await {
            Ok(movies) => {
                *self.movies.write() = movies;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to refresh trending movies");
                false
            }
        }
    }

    /// Snapshot of the current list.
    pub fn movies(&self) -> Vec<Movie> {
        self.movies.read().clone()
    }

    pub fn find(&self, id: MovieId) -> Option<Movie> {
        self.movies.read().iter().find(|m| m.id == id).cloned()
    }
}
