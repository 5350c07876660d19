//! Slice primitives: every piece of app state changes only by feeding an
//! intent through a reducer.
//!
//! ```text
//! command ──→ Intent ──→ Reducer ──→ SliceState ──→ printed view
//! ```
//!
//! Reducers never touch storage. A slice store runs the reducer and then,
//! for durable slices, writes the result through.

/// Something that can happen to a slice: a user command or a value read
/// back from storage during hydration.
pub trait Intent: Send + 'static {}

/// One named partition of app state.
///
/// `Default` is the pre-hydration value; `Clone` gives readers a snapshot
/// without holding the slice lock.
pub trait SliceState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// The only way a slice changes.
pub trait Reducer {
    type State: SliceState;
    type Intent: Intent;

    /// Pure transition; must not perform I/O.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
