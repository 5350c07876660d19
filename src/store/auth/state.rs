use serde::{Deserialize, Serialize};

use crate::mvi::SliceState;

/// Signed-in identity. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
}

/// Auth slice. Starts in `loading` until the persisted session is restored.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SliceState for AuthState {}

impl AuthState {
    /// Signed in and done restoring.
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}
