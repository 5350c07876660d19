//! Profile statistics derived from the watchlist.
//!
//! Pure projection: nothing is stored and nothing can fail.

use crate::tmdb::Movie;

/// Bars shown in the genre chart.
pub const TOP_GENRE_LIMIT: usize = 6;

/// Rough runtime used for the watch-time estimate.
pub const HOURS_PER_MOVIE: u32 = 2;

const GENRE_NAMES: &[(u32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (27, "Horror"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Sci-Fi"),
    (53, "Thriller"),
];

/// Display name for a TMDB genre id; unknown ids become their number.
pub fn genre_name(id: u32) -> String {
    GENRE_NAMES
        .iter()
        .find(|(code, _)| *code == id)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| id.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileStats {
    pub movies_added: usize,
    /// Every genre seen, in first-appearance order.
    pub genre_frequency: Vec<GenreCount>,
    /// Highest counts first, ties in first-appearance order, at most
    /// [`TOP_GENRE_LIMIT`] entries.
    pub top_genres: Vec<GenreCount>,
    /// Mean vote average; `0.0` for an empty watchlist.
    pub average_rating: f64,
    pub watch_time_hours: u32,
}

impl ProfileStats {
    pub fn from_watchlist(movies: &[Movie]) -> Self {
        let mut genre_frequency: Vec<GenreCount> = Vec::new();
        for genre in movies.iter().flat_map(|m| &m.genre_ids).map(|id| genre_name(*id)) {
            match genre_frequency.iter_mut().find(|g| g.genre == genre) {
                Some(entry) => entry.count += 1,
                None => genre_frequency.push(GenreCount { genre, count: 1 }),
            }
        }

        let mut top_genres = genre_frequency.clone();
        // Stable sort keeps first-appearance order among equal counts.
        top_genres.sort_by(|a, b| b.count.cmp(&a.count));
        top_genres.truncate(TOP_GENRE_LIMIT);

        let average_rating = if movies.is_empty() {
            0.0
        } else {
            movies.iter().map(|m| m.vote_average).sum::<f64>() / movies.len() as f64
        };

        Self {
            movies_added: movies.len(),
            genre_frequency,
            top_genres,
            average_rating,
            watch_time_hours: movies.len() as u32 * HOURS_PER_MOVIE,
        }
    }

    pub fn top_genre(&self) -> Option<&str> {
        self.top_genres.first().map(|g| g.genre.as_str())
    }

    /// Average rating with one decimal.
    pub fn average_rating_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64, vote_average: f64, genre_ids: &[u32]) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            overview: String::new(),
            vote_average,
            genre_ids: genre_ids.to_vec(),
        }
    }

    #[test]
    fn empty_watchlist_has_zero_stats() {
        let stats = ProfileStats::from_watchlist(&[]);
        assert_eq!(stats.movies_added, 0);
        assert_eq!(stats.average_rating, 0.0);
        assert_eq!(stats.watch_time_hours, 0);
        assert!(stats.top_genres.is_empty());
        assert_eq!(stats.top_genre(), None);
        assert_eq!(stats.average_rating_label(), "0.0");
    }

    #[test]
    fn genre_counts_rank_action_first() {
        let stats = ProfileStats::from_watchlist(&[movie(1, 7.0, &[28, 28, 12])]);
        assert_eq!(
            stats.genre_frequency,
            vec![
                GenreCount {
                    genre: "Action".to_string(),
                    count: 2
                },
                GenreCount {
                    genre: "Adventure".to_string(),
                    count: 1
                },
            ]
        );
        assert_eq!(stats.top_genre(), Some("Action"));
    }

    #[test]
    fn unknown_genre_passes_through_as_number() {
        let stats = ProfileStats::from_watchlist(&[movie(1, 5.0, &[99999])]);
        assert_eq!(stats.genre_frequency[0].genre, "99999");
        assert_eq!(stats.genre_frequency[0].count, 1);
    }

    #[test]
    fn top_genres_are_capped_and_sorted() {
        let movies = vec![
            movie(1, 6.0, &[28, 12, 16, 35, 80, 18, 10751, 14]),
            movie(2, 8.0, &[14, 14]),
            movie(3, 7.0, &[12]),
        ];
        let stats = ProfileStats::from_watchlist(&movies);

        assert_eq!(stats.top_genres.len(), TOP_GENRE_LIMIT);
        assert_eq!(stats.top_genres[0].genre, "Fantasy");
        assert_eq!(stats.top_genres[0].count, 3);
        assert_eq!(stats.top_genres[1].genre, "Adventure");
        // Ties keep first-appearance order.
        assert_eq!(stats.top_genres[2].genre, "Action");
    }

    #[test]
    fn tied_genres_keep_first_appearance_even_for_unknown_ids() {
        let stats = ProfileStats::from_watchlist(&[movie(1, 6.0, &[28, 99999, 12])]);
        let order: Vec<_> = stats.top_genres.iter().map(|g| g.genre.as_str()).collect();
        assert_eq!(order, vec!["Action", "99999", "Adventure"]);
    }

    #[test]
    fn average_and_watch_time() {
        let stats = ProfileStats::from_watchlist(&[movie(1, 7.0, &[]), movie(2, 8.0, &[])]);
        assert_eq!(stats.movies_added, 2);
        assert!((stats.average_rating - 7.5).abs() < f64::EPSILON);
        assert_eq!(stats.average_rating_label(), "7.5");
        assert_eq!(stats.watch_time_hours, 4);
    }
}
