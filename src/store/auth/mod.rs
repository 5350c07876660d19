mod intent;
mod reducer;
mod state;
mod store;

pub use intent::AuthIntent;
pub use reducer::AuthReducer;
pub use state::{AuthState, Session};
pub use store::AuthStore;
