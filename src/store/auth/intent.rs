use crate::mvi::Intent;

use super::state::Session;

#[derive(Debug, Clone)]
pub enum AuthIntent {
    /// Replace the current user and finish loading.
    SetUser(Option<Session>),
    SetLoading(bool),
    /// Drop the current user. `loading` is left as is.
    LoggedOut,
}

impl Intent for AuthIntent {}
