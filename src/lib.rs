//! cinetrack: trending movies, a personal watchlist, reviews and a local
//! profile, over an injected key-value store.

pub mod accounts;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod profile;
pub mod storage;
pub mod store;
pub mod tmdb;
