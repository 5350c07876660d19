//! Reviews keyed by movie id. Process lifetime only: never persisted and
//! not cleared on logout.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::ReviewIntent;
pub use reducer::ReviewReducer;
pub use state::{Review, ReviewState, REVIEW_AUTHOR};
pub use store::ReviewStore;
