use crate::mvi::Reducer;

use super::intent::AuthIntent;
use super::state::AuthState;

pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = AuthState;
    type Intent = AuthIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AuthIntent::SetUser(user) => AuthState {
                user,
                loading: false,
            },
            AuthIntent::SetLoading(loading) => AuthState { loading, ..state },
            AuthIntent::LoggedOut => AuthState {
                user: None,
                ..state
            },
        }
    }
}
