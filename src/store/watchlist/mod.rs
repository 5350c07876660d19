mod intent;
mod reducer;
mod state;
mod store;

pub use intent::WatchlistIntent;
pub use reducer::WatchlistReducer;
pub use state::WatchlistState;
pub use store::WatchlistStore;
