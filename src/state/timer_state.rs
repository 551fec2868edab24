//! Timer state structure and selection rules

use serde::Serialize;

use crate::{
    presets::{find_preset, PresetAction, PresetId},
    utils::{ceil_to_second, format_digital_clock},
};

/// Coarse view of where the countdown is, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Idle,
    Running,
    Expired,
}

/// Selected duration plus the snapshot of the current countdown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub hour: u32,
    pub min: u32,
    pub sec: u32,
    /// `None` means the duration was dialed by hand
    pub selected_action_id: Option<PresetId>,
    pub is_running: bool,
    /// Duration captured when the countdown started
    pub total_duration_ms: u64,
    pub remaining_ms: u64,
    /// Set only when a countdown ran to zero, not on a user stop
    pub is_expired: bool,
}

impl TimerState {
    /// Create a state with zero duration and no selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Duration currently dialed on the wheels, in milliseconds
    pub fn selected_duration_ms(&self) -> u64 {
        (u64::from(self.hour) * 3600 + u64::from(self.min) * 60 + u64::from(self.sec)) * 1000
    }

    pub fn formatted_selection(&self) -> String {
        format_digital_clock(self.selected_duration_ms())
    }

    /// Remaining time as `HH:MM:SS`, rounded up to the whole second
    pub fn formatted_remaining(&self) -> String {
        format_digital_clock(ceil_to_second(self.remaining_ms))
    }

    /// Elapsed share of the countdown in `[0, 1]`
    pub fn progress_fraction(&self) -> f32 {
        if self.total_duration_ms == 0 {
            return 1.0;
        }
        let remaining = self.remaining_ms.min(self.total_duration_ms);
        1.0 - (remaining as f64 / self.total_duration_ms as f64) as f32
    }

    pub fn selected_preset(&self) -> Option<&'static PresetAction> {
        self.selected_action_id.and_then(find_preset)
    }

    pub fn phase(&self) -> TimerPhase {
        if self.is_running {
            TimerPhase::Running
        } else if self.is_expired {
            TimerPhase::Expired
        } else {
            TimerPhase::Idle
        }
    }

    /// Set the hour field; a manual edit always drops the preset selection
    pub fn set_hour(&mut self, hour: u32) {
        self.hour = hour;
        self.selected_action_id = None;
    }

    pub fn set_min(&mut self, min: u32) {
        self.min = min;
        self.selected_action_id = None;
    }

    pub fn set_sec(&mut self, sec: u32) {
        self.sec = sec;
        self.selected_action_id = None;
    }

    /// Select a preset, or clear the selection with `None`.
    ///
    /// Known timed presets overwrite all three fields. Unknown ids and the
    /// create-new entry leave the state untouched and return `false`.
    /// Clearing keeps the dialed duration.
    pub fn select_preset(&mut self, action_id: Option<PresetId>) -> bool {
        let Some(id) = action_id else {
            self.selected_action_id = None;
            return true;
        };

        match find_preset(id) {
            Some(preset) => match preset.duration.filter(|_| preset.is_selectable()) {
                Some(duration) => {
                    self.hour = duration.hour;
                    self.min = duration.min;
                    self.sec = duration.sec;
                    self.selected_action_id = Some(id);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Zero the countdown snapshot without touching the selection
    pub fn clear(&mut self) {
        self.remaining_ms = 0;
        self.total_duration_ms = 0;
    }

    pub(crate) fn begin_countdown(&mut self) {
        self.total_duration_ms = self.selected_duration_ms();
        self.remaining_ms = self.total_duration_ms;
        self.is_expired = false;
        self.is_running = true;
    }

    /// Apply a tick from the live source. Remaining time is shown rounded up
    /// to the whole second and never grows.
    pub(crate) fn record_tick(&mut self, millis_until_finished: u64) {
        self.remaining_ms = ceil_to_second(millis_until_finished).min(self.remaining_ms);
    }

    pub(crate) fn expire(&mut self) {
        self.is_expired = true;
        self.remaining_ms = 0;
        self.is_running = false;
    }

    pub(crate) fn halt(&mut self) {
        self.is_running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialed(hour: u32, min: u32, sec: u32) -> TimerState {
        TimerState {
            hour,
            min,
            sec,
            ..TimerState::new()
        }
    }

    #[test]
    fn new_state_is_all_zero() {
        let state = TimerState::new();
        assert_eq!(state.selected_duration_ms(), 0);
        assert_eq!(state.selected_action_id, None);
        assert!(!state.is_running);
        assert!(!state.is_expired);
        assert_eq!(state.phase(), TimerPhase::Idle);
    }

    #[test]
    fn selected_duration_matches_formula() {
        for (h, m, s) in [(0, 0, 0), (0, 2, 0), (1, 15, 0), (12, 59, 59), (0, 0, 20)] {
            let expected = (u64::from(h) * 3600 + u64::from(m) * 60 + u64::from(s)) * 1000;
            assert_eq!(dialed(h, m, s).selected_duration_ms(), expected);
        }
    }

    #[test]
    fn progress_is_complete_when_nothing_was_started() {
        assert_eq!(TimerState::new().progress_fraction(), 1.0);
    }

    #[test]
    fn progress_tracks_elapsed_share() {
        let state = TimerState {
            total_duration_ms: 120_000,
            remaining_ms: 30_000,
            ..TimerState::new()
        };
        assert!((state.progress_fraction() - 0.75).abs() < f32::EPSILON);
    }

    #[test]
    fn formatted_remaining_rounds_up() {
        let state = TimerState {
            remaining_ms: 3_660_001,
            ..TimerState::new()
        };
        assert_eq!(state.formatted_remaining(), "01:01:01");
    }

    #[test]
    fn manual_edit_clears_selection() {
        let mut state = TimerState::new();
        assert!(state.select_preset(Some(3)));
        state.set_sec(5);
        assert_eq!(state.selected_action_id, None);
        assert_eq!((state.hour, state.min, state.sec), (0, 25, 5));
    }

    #[test]
    fn selecting_known_preset_overwrites_fields() {
        let mut state = dialed(5, 5, 5);
        assert!(state.select_preset(Some(7)));
        assert_eq!((state.hour, state.min, state.sec), (1, 15, 0));
        assert_eq!(state.selected_action_id, Some(7));
        assert_eq!(state.selected_preset().and_then(|p| p.title), Some("Cycling"));
    }

    #[test]
    fn unknown_preset_and_sentinel_are_no_ops() {
        let mut state = dialed(0, 1, 0);
        state.select_preset(Some(2));
        let before = state.clone();

        assert!(!state.select_preset(Some(99)));
        assert_eq!(state, before);
        assert!(!state.select_preset(Some(8)));
        assert_eq!(state, before);
    }

    #[test]
    fn deselect_keeps_dialed_duration() {
        let mut state = TimerState::new();
        state.select_preset(Some(1));
        assert!(state.select_preset(None));
        assert_eq!(state.selected_action_id, None);
        assert_eq!((state.hour, state.min, state.sec), (0, 15, 0));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut state = dialed(0, 0, 20);
        state.begin_countdown();
        state.halt();

        state.clear();
        let once = state.clone();
        state.clear();
        assert_eq!(state, once);
        assert_eq!(state.remaining_ms, 0);
        assert_eq!(state.total_duration_ms, 0);
        assert_eq!((state.hour, state.min, state.sec), (0, 0, 20));
    }

    #[test]
    fn ticks_round_up_and_never_increase() {
        let mut state = dialed(0, 0, 10);
        state.begin_countdown();
        state.record_tick(8_200);
        assert_eq!(state.remaining_ms, 9_000);
        state.record_tick(9_500);
        assert_eq!(state.remaining_ms, 9_000);
    }

    #[test]
    fn expiry_is_distinct_from_halt() {
        let mut state = dialed(0, 0, 10);
        state.begin_countdown();
        state.halt();
        assert_eq!(state.phase(), TimerPhase::Idle);
        assert_eq!(state.remaining_ms, 10_000);

        state.begin_countdown();
        state.expire();
        assert_eq!(state.phase(), TimerPhase::Expired);
        assert_eq!(state.remaining_ms, 0);
    }
}
