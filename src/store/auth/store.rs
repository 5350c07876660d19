use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::mvi::Reducer;
use crate::storage::{keys, Persistence, StorageError};

use super::intent::AuthIntent;
use super::reducer::AuthReducer;
use super::state::{AuthState, Session};

/// Owns the auth slice and the persisted session.
pub struct AuthStore {
    state: RwLock<AuthState>,
    persistence: Persistence,
    write_lock: Mutex<()>,
}

impl AuthStore {
    pub fn new(persistence: Persistence) -> Self {
        Self {
            state: RwLock::new(AuthState::default()),
            persistence,
            write_lock: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn user(&self) -> Option<Session> {
        self.state.read().user.clone()
    }

    fn dispatch(&self, intent: AuthIntent) {
        dispatch_slice!(self.state, AuthReducer, intent);
    }

    /// Restore the persisted session. Always finishes loading; a missing or
    /// unreadable session means signed out.
    pub async fn restore_auth(&self) {
        self.dispatch(AuthIntent::SetLoading(true));
        let user = self.persistence.load_or_warn::<Session>(keys::SESSION).await;
        tracing::debug!(restored = user.is_some(), "Auth restored");
        self.dispatch(AuthIntent::SetUser(user));
    }

    /// Persist `session` and make it the current user.
    ///
    /// Callers must have verified the credentials already. If the write
    /// fails the current user is unchanged.
    pub async fn login(&self, session: Session) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.persistence.save(keys::SESSION, &session).await?;
        tracing::info!(email = %session.email, "Logged in");
        self.dispatch(AuthIntent::SetUser(Some(session)));
        Ok(())
    }

    /// Remove the persisted session and watchlist, then drop the user.
    ///
    /// Reviews are process-scoped and not touched here.
    pub async fn logout(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        self.persistence.remove(keys::SESSION).await?;
        self.persistence.remove(keys::WATCHLIST).await?;
        self.dispatch(AuthIntent::LoggedOut);
        tracing::info!("Logged out");
        Ok(())
    }
}
