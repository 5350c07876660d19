use crate::mvi::SliceState;

use super::palette::{Palette, ThemeMode};

/// Current appearance. `colors` is always `Palette::for_mode(mode)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub colors: Palette,
}

impl SliceState for ThemeState {}
