use crate::mvi::Reducer;

use super::intent::ReviewIntent;
use super::state::{Review, ReviewState, REVIEW_AUTHOR};

pub struct ReviewReducer;

impl Reducer for ReviewReducer {
    type State = ReviewState;
    type Intent = ReviewIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ReviewIntent::Add {
                movie_id,
                text,
                date,
            } => {
                let mut by_movie = state.by_movie;
                by_movie.entry(movie_id).or_default().push(Review {
                    text,
                    user: REVIEW_AUTHOR.to_string(),
                    date,
                });
                ReviewState { by_movie }
            }
        }
    }
}
