//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_tmdb;

use std::path::Path;
use std::sync::Arc;

use cinetrack::app::AppContext;
use cinetrack::storage::{FileStore, MemoryStore};
use cinetrack::tmdb::Movie;

/// Movie with only the fields the stores care about.
pub fn movie(id: u64, title: &str, vote_average: f64, genre_ids: &[u32]) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: Some(format!("/poster-{}.jpg", id)),
        backdrop_path: None,
        release_date: Some("2024-03-01".to_string()),
        overview: String::new(),
        vote_average,
        genre_ids: genre_ids.to_vec(),
    }
}

/// Context over a fresh in-memory store, plus the store for assertions.
pub fn memory_context() -> (Arc<MemoryStore>, AppContext) {
    let store = Arc::new(MemoryStore::new());
    let ctx = AppContext::new(store.clone());
    (store, ctx)
}

/// Context over a file store rooted at `dir`.
pub fn file_context(dir: &Path) -> AppContext {
    let store = FileStore::open(dir).expect("Failed to open file store");
    AppContext::new(Arc::new(store))
}

/// Trending response body in the API's shape.
pub fn trending_body(movies: &[Movie]) -> String {
    serde_json::json!({
        "page": 1,
        "results": movies,
        "total_pages": 1,
        "total_results": movies.len()
    })
    .to_string()
}
