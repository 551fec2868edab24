//! Terminal presentation layer
//!
//! Turns typed commands into controller intents and timer snapshots into
//! text or JSON.

pub mod commands;
pub mod render;
pub mod snapshot;

pub use commands::{parse_command, Command, HELP};
pub use render::{progress_bar, render_line, render_presets, render_wheel};
pub use snapshot::SnapshotView;

/// How snapshots are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
