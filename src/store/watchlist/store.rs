use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::mvi::Reducer;
use crate::storage::{keys, Persistence, StorageError};
use crate::tmdb::{Movie, MovieId};

use super::intent::WatchlistIntent;
use super::reducer::WatchlistReducer;
use super::state::WatchlistState;

/// Owns the watchlist slice.
///
/// The in-memory list is the source of truth; storage is a mirror written
/// after every mutation. `write_lock` is held from the mutation through the
/// write, so writes to the watchlist key land in mutation order.
pub struct WatchlistStore {
    state: RwLock<WatchlistState>,
    persistence: Persistence,
    write_lock: Mutex<()>,
}

impl WatchlistStore {
    pub fn new(persistence: Persistence) -> Self {
        Self {
            state: RwLock::new(WatchlistState::default()),
            persistence,
            write_lock: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> WatchlistState {
        self.state.read().clone()
    }

    pub fn movies(&self) -> Vec<Movie> {
        self.state.read().movies.clone()
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.state.read().contains(id)
    }

    fn dispatch(&self, intent: WatchlistIntent) {
        dispatch_slice!(self.state, WatchlistReducer, intent);
    }

    /// Replace the list with the persisted one, if any.
    pub async fn load_watchlist(&self) {
        let _guard = self.write_lock.lock().await;
        if let Some(movies) = self
            .persistence
            .load_or_warn::<Vec<Movie>>(keys::WATCHLIST)
            .await
        {
            tracing::debug!(count = movies.len(), "Watchlist loaded");
            self.dispatch(WatchlistIntent::Replace(movies));
        }
    }

    /// Add `movie` unless its id is already present, then persist the list.
    pub async fn add_movie_and_persist(&self, movie: Movie) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let id = movie.id;
        self.dispatch(WatchlistIntent::Add(movie));
        self.persist().await?;
        tracing::info!(id, "Added movie to watchlist");
        Ok(())
    }

    /// Remove the movie with `id` (no-op if absent), then persist the list.
    pub async fn remove_movie_and_persist(&self, id: MovieId) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.dispatch(WatchlistIntent::Remove(id));
        self.persist().await?;
        tracing::info!(id, "Removed movie from watchlist");
        Ok(())
    }

    /// Empty the in-memory list without touching storage.
    pub async fn clear(&self) {
        let _guard = self.write_lock.lock().await;
        self.dispatch(WatchlistIntent::Clear);
    }

    async fn persist(&self) -> Result<(), StorageError> {
        let movies = self.movies();
        self.persistence.save(keys::WATCHLIST, &movies).await
    }
}
