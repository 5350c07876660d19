//! Application context: every store, wired to one injected key-value store.

use std::sync::Arc;

use crate::accounts::{AccountBook, AuthError, User};
use crate::profile::ProfileStats;
use crate::storage::{KeyValueStore, Persistence, StorageError};
use crate::store::auth::{AuthStore, Session};
use crate::store::reviews::ReviewStore;
use crate::store::theme::ThemeStore;
use crate::store::watchlist::WatchlistStore;

/// Which top-level surface should be shown.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    /// Session not restored yet: show a blocking indicator.
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Explicit container for all slices.
///
/// Built once per process and passed to whatever drives it; nothing in the
/// crate reaches for a global.
pub struct AppContext {
    pub theme: ThemeStore,
    pub auth: AuthStore,
    pub watchlist: WatchlistStore,
    pub reviews: ReviewStore,
    pub accounts: AccountBook,
}

impl AppContext {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let persistence = Persistence::new(store);
        tracing::debug!(store = persistence.backend_name(), "Building app context");
        Self {
            theme: ThemeStore::new(persistence.clone()),
            auth: AuthStore::new(persistence.clone()),
            watchlist: WatchlistStore::new(persistence.clone()),
            reviews: ReviewStore::new(),
            accounts: AccountBook::new(persistence),
        }
    }

    /// Populate the stores from storage: session and theme first, then the
    /// watchlist if someone is signed in.
    pub async fn hydrate(&self) {
        tokio::join!(self.auth.restore_auth(), self.theme.load_theme());
        if self.auth.user().is_some() {
            self.watchlist.load_watchlist().await;
        }
    }

    pub fn route(&self) -> Route {
        let auth = self.auth.snapshot();
        if auth.loading {
            Route::Loading
        } else if auth.is_authenticated() {
            Route::Authenticated
        } else {
            Route::Unauthenticated
        }
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        self.accounts.register(name, email, password).await
    }

    /// Verify credentials, then start a session and load its watchlist.
    ///
    /// On any rejection the current user is left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = self.accounts.verify(email, password).await?;
        self.auth.login(session.clone()).await?;
        self.watchlist.load_watchlist().await;
        Ok(session)
    }

    /// End the session: clears the session and watchlist keys and the
    /// in-memory watchlist. Reviews survive until the process exits.
    pub async fn logout(&self) -> Result<(), StorageError> {
        self.auth.logout().await?;
        self.watchlist.clear().await;
        Ok(())
    }

    pub fn profile(&self) -> ProfileStats {
        ProfileStats::from_watchlist(&self.watchlist.movies())
    }
}
