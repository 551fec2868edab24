//! Serializable snapshot of the timer for JSON output

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::{TimerPhase, TimerState};

/// One rendered frame of the timer
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotView {
    pub phase: TimerPhase,
    pub hour: u32,
    pub min: u32,
    pub sec: u32,
    pub selected_action_id: Option<u32>,
    pub selected_action: Option<String>,
    pub remaining: String,
    pub remaining_ms: u64,
    pub total_duration_ms: u64,
    pub progress: f32,
    pub timestamp: DateTime<Utc>,
}

impl SnapshotView {
    pub fn from_state(state: &TimerState) -> Self {
        Self {
            phase: state.phase(),
            hour: state.hour,
            min: state.min,
            sec: state.sec,
            selected_action_id: state.selected_action_id,
            selected_action: state
                .selected_preset()
                .and_then(|preset| preset.title)
                .map(str::to_string),
            remaining: state.formatted_remaining(),
            remaining_ms: state.remaining_ms,
            total_duration_ms: state.total_duration_ms,
            progress: state.progress_fraction(),
            timestamp: Utc::now(),
        }
    }
}
