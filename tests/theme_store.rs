mod common;

use cinetrack::storage::keys;
use cinetrack::store::theme::{Palette, ThemeMode};
use common::memory_context;

#[tokio::test]
async fn initial_theme_is_dark() {
    let (_, ctx) = memory_context();
    let theme = ctx.theme.snapshot();
    assert_eq!(theme.mode, ThemeMode::Dark);
    assert_eq!(theme.colors, Palette::for_mode(ThemeMode::Dark));
}

#[tokio::test]
async fn toggle_twice_restores_mode_and_palette() {
    let (store, ctx) = memory_context();
    let original = ctx.theme.snapshot();

    assert_eq!(ctx.theme.toggle_theme().await.unwrap(), ThemeMode::Light);
    assert_eq!(store.raw(keys::THEME).as_deref(), Some("\"light\""));
    assert_eq!(ctx.theme.snapshot().colors.background, "#ffffff");

    assert_eq!(ctx.theme.toggle_theme().await.unwrap(), ThemeMode::Dark);
    assert_eq!(ctx.theme.snapshot(), original);
    assert_eq!(store.raw(keys::THEME).as_deref(), Some("\"dark\""));
}

#[tokio::test]
async fn load_theme_applies_persisted_mode() {
    let (store, ctx) = memory_context();
    store.insert_raw(keys::THEME, "\"light\"");

    ctx.theme.load_theme().await;
    assert_eq!(ctx.theme.mode(), ThemeMode::Light);
    assert_eq!(ctx.theme.snapshot().colors, Palette::for_mode(ThemeMode::Light));
}

#[tokio::test]
async fn load_theme_without_value_keeps_default_and_writes_nothing() {
    let (store, ctx) = memory_context();
    ctx.theme.load_theme().await;

    assert_eq!(ctx.theme.mode(), ThemeMode::Dark);
    assert!(!store.contains(keys::THEME));
}

#[tokio::test]
async fn corrupted_theme_is_ignored() {
    let (store, ctx) = memory_context();
    store.insert_raw(keys::THEME, "\"sepia\"");

    ctx.theme.load_theme().await;
    assert_eq!(ctx.theme.mode(), ThemeMode::Dark);
}

#[tokio::test]
async fn failed_toggle_leaves_state_unchanged() {
    let (store, ctx) = memory_context();
    store.set_failing(true);

    assert!(ctx.theme.toggle_theme().await.is_err());
    assert_eq!(ctx.theme.mode(), ThemeMode::Dark);
}
