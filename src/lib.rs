//! Dial Timer - a countdown timer with preset actions
//!
//! This library holds the timer state and its selection rules, the reactive
//! store that publishes it, the picker wheels, cancellable tick sources, and
//! the controller that runs the countdown.

pub mod config;
pub mod controller;
pub mod picker;
pub mod presets;
pub mod state;
pub mod tasks;
pub mod ticker;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Config;
pub use controller::{Intent, TimerController};
pub use presets::{find_preset, PresetAction, PresetId, PRESETS};
pub use state::{TimerState, TimerStore};
pub use ticker::{IntervalTickSource, SimulatedTickSource, TickEvent, TickSource};
pub use utils::format_digital_clock;
