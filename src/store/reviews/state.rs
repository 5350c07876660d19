use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::mvi::SliceState;
use crate::tmdb::MovieId;

/// Placeholder author shown on every review.
pub const REVIEW_AUTHOR: &str = "You";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub text: String,
    pub user: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReviewState {
    pub by_movie: BTreeMap<MovieId, Vec<Review>>,
}

impl SliceState for ReviewState {}

impl ReviewState {
    /// Reviews for `movie_id` in posting order; empty if none.
    pub fn reviews_for(&self, movie_id: MovieId) -> &[Review] {
        self.by_movie
            .get(&movie_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
