//! Utility functions module
//!
//! Clock formatting shared by the state and the view, and signal handling
//! for the session loop.

pub mod clock;
pub mod signals;

// Re-export main functions
pub use clock::{ceil_to_second, format_digital_clock, format_unit};
pub use signals::shutdown_signal;
