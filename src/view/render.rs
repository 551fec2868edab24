//! Plain-text rendering of the timer

use crate::{
    picker::{PickerWheel, TimeField},
    presets::{PresetKind, PRESETS},
    state::{TimerPhase, TimerState},
    utils::format_unit,
};

const BAR_WIDTH: usize = 20;

/// Text stand-in for the circular progress indicator
pub fn progress_bar(fraction: f32) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

/// Single status line for the current state
pub fn render_line(state: &TimerState) -> String {
    let title = state
        .selected_preset()
        .and_then(|preset| preset.title)
        .map(|title| format!("  {}", title))
        .unwrap_or_default();

    match state.phase() {
        TimerPhase::Running => format!(
            "{} {}{}",
            progress_bar(state.progress_fraction()),
            state.formatted_remaining(),
            title
        ),
        TimerPhase::Expired => format!("{} 00:00:00{}  time's up", progress_bar(1.0), title),
        TimerPhase::Idle => {
            let dial = TimeField::ALL
                .iter()
                .map(|field| {
                    let value = match field {
                        TimeField::Hour => state.hour,
                        TimeField::Minute => state.min,
                        TimeField::Second => state.sec,
                    };
                    render_wheel(&PickerWheel::for_field(*field), value)
                })
                .collect::<Vec<_>>()
                .join("  ");
            format!("{}{}", dial, title)
        }
    }
}

/// A wheel settled on `value`, with its neighbours either side
pub fn render_wheel(wheel: &PickerWheel, value: u32) -> String {
    let entries = wheel.entries();
    let index = wheel.index_of(value);
    let neighbour = |i: usize| {
        entries
            .get(i)
            .map(|entry| format!("{:>2}", entry.label()))
            .unwrap_or_else(|| "  ".to_string())
    };
    format!(
        "{} [{}] {} {}",
        neighbour(index - 1),
        format_unit(value as i32),
        neighbour(index + 1),
        wheel.field().suffix()
    )
}

/// Preset grid, one action per line
pub fn render_presets() -> String {
    PRESETS
        .iter()
        .map(|preset| match (preset.kind, preset.title, preset.duration) {
            (PresetKind::Timed, Some(title), Some(duration)) => {
                format!("{:>2}  {:<14}{}", preset.id, title, duration)
            }
            _ => format!("{:>2}  + new action", preset.id),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
