//! Fixed color tables for the two theme modes.

use serde::{Deserialize, Serialize};

/// Light or dark appearance. Persisted as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Stable persisted name; once published, do not rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Resolved colors, as `#rrggbb` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_tertiary: &'static str,
    pub border: &'static str,
    pub primary: &'static str,
    pub error: &'static str,
    pub tab_bar: &'static str,
    pub tab_bar_border: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    surface: "#f5f5f5",
    card: "#ffffff",
    text: "#000000",
    text_secondary: "#666666",
    text_tertiary: "#999999",
    border: "#e0e0e0",
    primary: "#4f8cff",
    error: "#ff4444",
    tab_bar: "#ffffff",
    tab_bar_border: "#e0e0e0",
};

pub const DARK: Palette = Palette {
    background: "#000000",
    surface: "#111111",
    card: "#1a1a1a",
    text: "#ffffff",
    text_secondary: "#aaaaaa",
    text_tertiary: "#777777",
    border: "#333333",
    primary: "#4f8cff",
    error: "#ff4444",
    tab_bar: "#000000",
    tab_bar_border: "#111111",
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }

    /// Named entries in display order.
    pub fn entries(&self) -> [(&'static str, &'static str); 11] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("card", self.card),
            ("text", self.text),
            ("text_secondary", self.text_secondary),
            ("text_tertiary", self.text_tertiary),
            ("border", self.border),
            ("primary", self.primary),
            ("error", self.error),
            ("tab_bar", self.tab_bar),
            ("tab_bar_border", self.tab_bar_border),
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}
