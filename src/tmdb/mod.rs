//! Trending-movies client for the TMDB API.
//!
//! Records are validated one by one at this boundary: anything without an
//! `id` and a `title` is dropped with a warning instead of flowing into the
//! stores untyped.

mod client;
mod error;
mod feed;
mod types;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use feed::DiscoverFeed;
pub use types::{Movie, MovieId, TrendingPage};
