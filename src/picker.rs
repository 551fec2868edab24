//! Picker wheels for the hour, minute and second fields
//!
//! Each wheel lists `-1, 0, 1, ..., N, N + 1`. The first and last items are
//! spacers that let the boundary values reach the centre of the wheel; only
//! `0..=N` can be committed to state.

use std::fmt;

use serde::Serialize;

use crate::utils::format_unit;

/// Largest committable hour
pub const MAX_HOUR: u32 = 12;
/// Largest committable minute or second
pub const MAX_MIN_SEC: u32 = 59;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeField {
    Hour,
    Minute,
    Second,
}

impl TimeField {
    pub const ALL: [TimeField; 3] = [TimeField::Hour, TimeField::Minute, TimeField::Second];

    pub fn suffix(&self) -> &'static str {
        match self {
            TimeField::Hour => "hours",
            TimeField::Minute => "min",
            TimeField::Second => "sec",
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEntry {
    Spacer,
    Value(u32),
}

impl PickerEntry {
    pub fn label(&self) -> String {
        match self {
            PickerEntry::Spacer => String::new(),
            PickerEntry::Value(value) => format_unit(*value as i32),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerWheel {
    field: TimeField,
    max: u32,
}

impl PickerWheel {
    pub fn for_field(field: TimeField) -> Self {
        let max = match field {
            TimeField::Hour => MAX_HOUR,
            TimeField::Minute | TimeField::Second => MAX_MIN_SEC,
        };
        Self { field, max }
    }

    pub fn field(&self) -> TimeField {
        self.field
    }

    /// Largest value this wheel can commit
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Raw list items, spacers included
    pub fn items(&self) -> impl Iterator<Item = i32> {
        -1..=(self.max as i32 + 1)
    }

    pub fn entries(&self) -> Vec<PickerEntry> {
        self.items()
            .map(|item| {
                if item < 0 || item as u32 > self.max {
                    PickerEntry::Spacer
                } else {
                    PickerEntry::Value(item as u32)
                }
            })
            .collect()
    }

    /// Value to commit when `item` settles in the centre.
    /// Spacers and anything beyond them snap to the nearest real value.
    pub fn commit(&self, item: i32) -> u32 {
        item.clamp(0, self.max as i32) as u32
    }

    /// Same as [`commit`](Self::commit) for a list position
    pub fn commit_index(&self, index: usize) -> u32 {
        let item = i32::try_from(index).unwrap_or(i32::MAX).saturating_sub(1);
        self.commit(item)
    }

    /// List position that shows `value` in the centre
    pub fn index_of(&self, value: u32) -> usize {
        value.min(self.max) as usize + 1
    }
}
