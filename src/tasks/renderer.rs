//! Snapshot printer background task

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{
    state::TimerState,
    view::{render_line, OutputFormat, SnapshotView},
};

/// Format one state for output
pub fn format_snapshot(state: &TimerState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_line(state),
        OutputFormat::Json => match serde_json::to_string(&SnapshotView::from_state(state)) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize snapshot: {}", e);
                String::new()
            }
        },
    }
}

/// Print the state every time the store publishes a change.
/// Ends when the store is dropped.
pub async fn renderer_task(mut state_rx: watch::Receiver<TimerState>, format: OutputFormat) {
    debug!("Starting renderer task");

    let mut last_line = String::new();
    loop {
        let line = format_snapshot(&state_rx.borrow_and_update(), format);
        // Several updates can collapse to the same line, e.g. two ticks
        // rounding to the same second
        if !line.is_empty() && line != last_line {
            println!("{}", line);
            last_line = line;
        }

        if state_rx.changed().await.is_err() {
            debug!("Timer store closed, renderer exiting");
            break;
        }
    }
}
