use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::mvi::Reducer;
use crate::storage::{keys, Persistence, StorageError};

use super::intent::ThemeIntent;
use super::palette::ThemeMode;
use super::reducer::ThemeReducer;
use super::state::ThemeState;

/// Owns the theme slice and mirrors the mode to storage.
pub struct ThemeStore {
    state: RwLock<ThemeState>,
    persistence: Persistence,
    write_lock: Mutex<()>,
}

impl ThemeStore {
    pub fn new(persistence: Persistence) -> Self {
        Self {
            state: RwLock::new(ThemeState::default()),
            persistence,
            write_lock: Mutex::new(()),
        }
    }

    pub fn snapshot(&self) -> ThemeState {
        self.state.read().clone()
    }

    pub fn mode(&self) -> ThemeMode {
        self.state.read().mode
    }

    fn dispatch(&self, intent: ThemeIntent) {
        dispatch_slice!(self.state, ThemeReducer, intent);
    }

    /// Apply the persisted mode, if any.
    ///
    /// Absent or unreadable values leave the in-memory mode untouched and
    /// nothing is written back.
    pub async fn load_theme(&self) {
        if let Some(mode) = self.persistence.load_or_warn::<ThemeMode>(keys::THEME).await {
            self.dispatch(ThemeIntent::SetMode(mode));
        }
    }

    /// Flip the mode, persist it, then update the palette.
    ///
    /// If the write fails the state is left unchanged.
    pub async fn toggle_theme(&self) -> Result<ThemeMode, StorageError> {
        let _guard = self.write_lock.lock().await;
        let next = self.mode().toggled();
        self.persistence.save(keys::THEME, &next).await?;
        self.dispatch(ThemeIntent::SetMode(next));
        tracing::info!(mode = next.as_str(), "Theme toggled");
        Ok(next)
    }
}
