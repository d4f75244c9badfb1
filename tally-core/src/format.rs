//! Human-readable rendering of minute totals.

use crate::units::Unit;

/// Renders a number of minutes for display.
///
/// - `0` → `"0 min"`
/// - under an hour → `"45 min"` (never pluralized)
/// - whole hours → `"1 hr"`, `"2 hrs"`
/// - otherwise → `"1 hr 30 mins"`, `"2 hrs 1 min"`
///
/// # Examples
///
/// ```
/// # use tally_core::format::format_total_time;
/// assert_eq!(format_total_time(90), "1 hr 30 mins");
/// assert_eq!(format_total_time(120), "2 hrs");
/// assert_eq!(format_total_time(45), "45 min");
/// ```
pub fn format_total_time(total_minutes: u64) -> String {
    if total_minutes == 0 {
        return format!("0 {}", Unit::Minute.as_ref());
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours == 0 {
        return format!("{minutes} {}", Unit::Minute.as_ref());
    }

    let hour_text = Unit::Hour.label(hours);
    if minutes == 0 {
        return hour_text;
    }
    format!("{hour_text} {}", Unit::Minute.label(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_total_time(0), "0 min");
    }

    #[test]
    fn minutes_only_are_not_pluralized() {
        assert_eq!(format_total_time(1), "1 min");
        assert_eq!(format_total_time(45), "45 min");
        assert_eq!(format_total_time(59), "59 min");
    }

    #[test]
    fn whole_hours() {
        assert_eq!(format_total_time(60), "1 hr");
        assert_eq!(format_total_time(120), "2 hrs");
        assert_eq!(format_total_time(600), "10 hrs");
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_total_time(61), "1 hr 1 min");
        assert_eq!(format_total_time(90), "1 hr 30 mins");
        assert_eq!(format_total_time(121), "2 hrs 1 min");
        assert_eq!(format_total_time(210), "3 hrs 30 mins");
    }

    #[test]
    fn large_totals() {
        assert_eq!(format_total_time(u64::from(u32::MAX)), "71582788 hrs 15 mins");
    }

    #[test]
    fn output_is_never_blank_or_padded() {
        for minutes in (0..=1500).chain([u64::MAX]) {
            let text = format_total_time(minutes);
            assert!(!text.is_empty());
            assert_eq!(text, text.trim(), "padding for {minutes}");
        }
    }
}
