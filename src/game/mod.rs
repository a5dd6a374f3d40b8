//! Game state and the action reducer
//!
//! The state is an immutable value: every transition takes a reference
//! and returns a fresh [`GameState`]. Rendering reads the state; user
//! input maps to an [`Action`] fed through [`reduce`].

mod reducer;
mod state;

pub use reducer::{reduce, Action};
pub use state::{GameState, HistoryEntry};
