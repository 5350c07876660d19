use crate::mvi::Reducer;

use super::intent::WatchlistIntent;
use super::state::WatchlistState;

pub struct WatchlistReducer;

impl Reducer for WatchlistReducer {
    type State = WatchlistState;
    type Intent = WatchlistIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WatchlistIntent::Replace(movies) => WatchlistState { movies },
            WatchlistIntent::Add(movie) => {
                if state.contains(movie.id) {
                    return state;
                }
                let mut movies = state.movies;
                movies.push(movie);
                WatchlistState { movies }
            }
            WatchlistIntent::Remove(id) => {
                let mut movies = state.movies;
                movies.retain(|m| m.id != id);
                WatchlistState { movies }
            }
            WatchlistIntent::Clear => WatchlistState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tmdb::Movie;

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            overview: String::new(),
            vote_average: 0.0,
            genre_ids: Vec::new(),
        }
    }

    #[test]
    fn add_appends_in_order() {
        let state = WatchlistReducer::reduce(WatchlistState::default(), WatchlistIntent::Add(movie(1, "A")));
        let state = WatchlistReducer::reduce(state, WatchlistIntent::Add(movie(2, "B")));
        let ids: Vec<_> = state.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn add_is_idempotent_by_id() {
        let state = WatchlistReducer::reduce(WatchlistState::default(), WatchlistIntent::Add(movie(1, "A")));
        let state = WatchlistReducer::reduce(state, WatchlistIntent::Add(movie(1, "A (re-release)")));
        assert_eq!(state.movies.len(), 1);
        assert_eq!(state.movies[0].title, "A");
    }

    #[test]
    fn remove_of_missing_id_is_noop() {
        let state = WatchlistReducer::reduce(WatchlistState::default(), WatchlistIntent::Add(movie(1, "A")));
        let after = WatchlistReducer::reduce(state.clone(), WatchlistIntent::Remove(99));
        assert_eq!(after, state);
    }

    #[test]
    fn replace_and_clear() {
        let state = WatchlistReducer::reduce(
            WatchlistState::default(),
            WatchlistIntent::Replace(vec![movie(5, "E"), movie(6, "F")]),
        );
        assert_eq!(state.movies.len(), 2);
        let state = WatchlistReducer::reduce(state, WatchlistIntent::Clear);
        assert!(state.is_empty());
    }
}
