//! State management module
//!
//! The timer state, its selection rules, and the store that publishes it.

pub mod store;
pub mod timer_state;

// Re-export main types
pub use store::{LastAction, TimerStore};
pub use timer_state::{TimerPhase, TimerState};
