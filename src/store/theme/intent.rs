use crate::mvi::Intent;

use super::palette::ThemeMode;

#[derive(Debug, Clone)]
pub enum ThemeIntent {
    /// Switch to `mode` and resolve its palette.
    SetMode(ThemeMode),
}

impl Intent for ThemeIntent {}
