use crate::mvi::SliceState;
use crate::tmdb::{Movie, MovieId};

/// Saved movies in insertion order, unique by id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WatchlistState {
    pub movies: Vec<Movie>,
}

impl SliceState for WatchlistState {}

impl WatchlistState {
    pub fn contains(&self, id: MovieId) -> bool {
        self.movies.iter().any(|m| m.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
