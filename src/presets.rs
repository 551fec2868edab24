//! Preset action catalog
//!
//! Named durations the user can pick instead of dialing the wheels by hand.
//! The catalog is fixed at compile time and always ends with the inert
//! "create new" entry.

use std::fmt;

use serde::Serialize;

use crate::utils::format_unit;

/// Stable identity of a preset action
pub type PresetId = u32;

/// Hour, minute and second components of a preset duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockTime {
    pub hour: u32,
    pub min: u32,
    pub sec: u32,
}

impl ClockTime {
    pub const fn new(hour: u32, min: u32, sec: u32) -> Self {
        Self { hour, min, sec }
    }

    /// Total length in milliseconds
    pub fn as_millis(&self) -> u64 {
        (u64::from(self.hour) * 3600 + u64::from(self.min) * 60 + u64::from(self.sec)) * 1000
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            format_unit(self.hour as i32),
            format_unit(self.min as i32),
            format_unit(self.sec as i32)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    Timed,
    CreateNew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetAction {
    pub id: PresetId,
    /// `None` only for the create-new entry
    pub title: Option<&'static str>,
    /// `None` only for the create-new entry
    pub duration: Option<ClockTime>,
    pub kind: PresetKind,
}

impl PresetAction {
    const fn timed(id: PresetId, title: &'static str, duration: ClockTime) -> Self {
        Self {
            id,
            title: Some(title),
            duration: Some(duration),
            kind: PresetKind::Timed,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.kind == PresetKind::Timed && self.duration.is_some()
    }
}

pub static PRESETS: [PresetAction; 9] = [
    PresetAction::timed(0, "Brush teeth", ClockTime::new(0, 2, 0)),
    PresetAction::timed(1, "Face mask", ClockTime::new(0, 15, 0)),
    PresetAction::timed(2, "Steam eggs", ClockTime::new(0, 10, 0)),
    PresetAction::timed(3, "Pomodoro", ClockTime::new(0, 25, 0)),
    PresetAction::timed(4, "Hand washing", ClockTime::new(0, 0, 20)),
    PresetAction::timed(5, "Homework", ClockTime::new(0, 35, 0)),
    PresetAction::timed(6, "Exercise", ClockTime::new(0, 20, 0)),
    PresetAction::timed(7, "Cycling", ClockTime::new(1, 15, 0)),
    PresetAction {
        id: 8,
        title: None,
        duration: None,
        kind: PresetKind::CreateNew,
    },
];

/// Look up a preset by id
pub fn find_preset(id: PresetId) -> Option<&'static PresetAction> {
    PRESETS.iter().find(|preset| preset.id == id)
}

/// Look up a timed preset by title, ignoring case and surrounding whitespace
pub fn find_preset_by_title(title: &str) -> Option<&'static PresetAction> {
    let wanted = title.trim();
    PRESETS.iter().find(|preset| {
        preset
            .title
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(wanted))
    })
}

/// Resolve a user-supplied preset reference, either a numeric id or a title
pub fn resolve_preset(reference: &str) -> Option<&'static PresetAction> {
    match reference.trim().parse::<PresetId>() {
        Ok(id) => find_preset(id),
        Err(_) => find_preset_by_title(reference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_new_entry_is_unique_and_last() {
        let sentinels: Vec<_> = PRESETS
            .iter()
            .filter(|preset| preset.kind == PresetKind::CreateNew)
            .collect();
        assert_eq!(sentinels.len(), 1);
        assert_eq!(PRESETS.last().map(|p| p.kind), Some(PresetKind::CreateNew));
        assert!(sentinels[0].title.is_none());
        assert!(sentinels[0].duration.is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = PRESETS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PRESETS.len());
    }

    #[test]
    fn finds_by_id_and_title() {
        assert_eq!(find_preset(3).and_then(|p| p.title), Some("Pomodoro"));
        assert!(find_preset(42).is_none());
        assert_eq!(find_preset_by_title("  hand WASHING ").map(|p| p.id), Some(4));
        assert!(find_preset_by_title("Nap").is_none());
    }

    #[test]
    fn resolves_numeric_and_named_references() {
        assert_eq!(resolve_preset("7").map(|p| p.id), Some(7));
        assert_eq!(resolve_preset("cycling").map(|p| p.id), Some(7));
        assert!(resolve_preset("99").is_none());
    }

    #[test]
    fn clock_time_displays_padded() {
        assert_eq!(ClockTime::new(1, 15, 0).to_string(), "01:15:00");
        assert_eq!(ClockTime::new(0, 0, 20).as_millis(), 20_000);
    }

    #[test]
    fn sentinel_is_not_selectable() {
        assert!(find_preset(0).is_some_and(|p| p.is_selectable()));
        assert!(find_preset(8).is_some_and(|p| !p.is_selectable()));
    }
}
