use crate::mvi::Reducer;

use super::intent::ThemeIntent;
use super::palette::Palette;
use super::state::ThemeState;

pub struct ThemeReducer;

impl Reducer for ThemeReducer {
    type State = ThemeState;
    type Intent = ThemeIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ThemeIntent::SetMode(mode) => ThemeState {
                mode,
                colors: Palette::for_mode(mode),
            },
        }
    }
}
