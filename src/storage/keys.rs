//! Process-wide persistence keys.

pub const SESSION: &str = "@movieapp_auth";
pub const THEME: &str = "@movieapp_theme";
pub const WATCHLIST: &str = "@movieapp_watchlist";
pub const USERS: &str = "@movieapp_users";
