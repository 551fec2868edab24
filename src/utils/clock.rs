//! Digital clock formatting helpers

/// Format milliseconds as `HH:MM:SS`, truncating any partial second.
///
/// Hours are not wrapped at 24.
pub fn format_digital_clock(millis: u64) -> String {
    let total_secs = millis / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Round milliseconds up to the next whole second.
pub fn ceil_to_second(millis: u64) -> u64 {
    millis.div_ceil(1000) * 1000
}

/// Two-character label for a picker item or a single clock component
pub fn format_unit(value: i32) -> String {
    if (0..=9).contains(&value) {
        format!("{:02}", value)
    } else {
        format!("{:>2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(format_digital_clock(0), "00:00:00");
        assert_eq!(format_digital_clock(61_000), "00:01:01");
        assert_eq!(format_digital_clock(3_661_000), "01:01:01");
        assert_eq!(format_digital_clock(4_500_000), "01:15:00");
    }

    #[test]
    fn truncates_partial_seconds() {
        assert_eq!(format_digital_clock(1_999), "00:00:01");
    }

    #[test]
    fn does_not_wrap_past_a_day() {
        assert_eq!(format_digital_clock(25 * 3_600_000), "25:00:00");
    }

    #[test]
    fn ceil_rounds_up_only_partial_seconds() {
        assert_eq!(ceil_to_second(0), 0);
        assert_eq!(ceil_to_second(1), 1000);
        assert_eq!(ceil_to_second(1000), 1000);
        assert_eq!(ceil_to_second(119_001), 120_000);
    }

    #[test]
    fn unit_labels_are_two_wide() {
        assert_eq!(format_unit(0), "00");
        assert_eq!(format_unit(7), "07");
        assert_eq!(format_unit(42), "42");
        assert_eq!(format_unit(-1), "-1");
    }
}
