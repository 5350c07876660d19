use chrono::Utc;
use parking_lot::RwLock;

use crate::mvi::Reducer;
use crate::tmdb::MovieId;

use super::intent::ReviewIntent;
use super::reducer::ReviewReducer;
use super::state::{Review, ReviewState};

/// Owns the review slice. Nothing here touches storage.
#[derive(Default)]
pub struct ReviewStore {
    state: RwLock<ReviewState>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reviews_for(&self, movie_id: MovieId) -> Vec<Review> {
        self.state.read().reviews_for(movie_id).to_vec()
    }

    /// Post a review stamped with the current time.
    ///
    /// Blank text is ignored and `false` returned; anything else is kept
    /// exactly as written.
    pub fn add_review(&self, movie_id: MovieId, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        dispatch_slice!(
            self.state,
            ReviewReducer,
            ReviewIntent::Add {
                movie_id,
                text: text.to_string(),
                date: Utc::now(),
            }
        );
        tracing::debug!(movie_id, "Review added");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_review_is_ignored() {
        let store = ReviewStore::new();
        assert!(!store.add_review(1, "   "));
        assert!(store.reviews_for(1).is_empty());
    }

    #[test]
    fn review_text_is_stored_as_written() {
        let store = ReviewStore::new();
        assert!(store.add_review(1, "  loved it \n"));
        assert_eq!(store.reviews_for(1)[0].text, "  loved it \n");
    }
}
