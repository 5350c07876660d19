mod intent;
mod palette;
mod reducer;
mod state;
mod store;

pub use intent::ThemeIntent;
pub use palette::{Palette, ThemeMode};
pub use reducer::ThemeReducer;
pub use state::ThemeState;
pub use store::ThemeStore;
