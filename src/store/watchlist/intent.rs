use crate::mvi::Intent;
use crate::tmdb::{Movie, MovieId};

#[derive(Debug, Clone)]
pub enum WatchlistIntent {
    /// Replace the whole list (hydration).
    Replace(Vec<Movie>),
    /// Append unless a movie with the same id is present.
    Add(Movie),
    /// Drop the movie with this id, if any.
    Remove(MovieId),
    Clear,
}

impl Intent for WatchlistIntent {}
