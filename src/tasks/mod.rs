//! Runtime tasks module
//!
//! The session loop that owns the controller, and the renderer that follows
//! the timer store.

pub mod renderer;
pub mod session;

// Re-export main functions
pub use renderer::{format_snapshot, renderer_task};
pub use session::{apply_line, run_session, SessionEnd, SessionOptions};
