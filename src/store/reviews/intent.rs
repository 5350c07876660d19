use chrono::{DateTime, Utc};

use crate::mvi::Intent;
use crate::tmdb::MovieId;

#[derive(Debug, Clone)]
pub enum ReviewIntent {
    /// Append a review. The timestamp is taken by the caller so the reducer
    /// stays pure.
    Add {
        movie_id: MovieId,
        text: String,
        date: DateTime<Utc>,
    },
}

impl Intent for ReviewIntent {}
