//! State slices: auth, watchlist, reviews and theme.
//!
//! Each slice is a `state`/`intent`/`reducer` triple plus a store that owns
//! the state, runs the reducer and, where the slice is durable, mirrors the
//! result to storage. Stores are explicit objects collected in
//! [`crate::app::AppContext`]; nothing here is global.

/// Run a reducer over the state behind a `parking_lot::RwLock`.
macro_rules! dispatch_slice {
    ($lock:expr, $reducer:ty, $intent:expr) => {{
        let mut guard = $lock.write();
        *guard = <$reducer>::reduce(std::mem::take(&mut *guard), $intent);
    }};
}

pub mod auth;
pub mod reviews;
pub mod theme;
pub mod watchlist;
