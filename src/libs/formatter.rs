//! Text formatting for grid labels and durations.
//!
//! Minute offsets print as wall-clock `HH:MM`. Offsets on a neighbouring day
//! carry a day marker so a night shift reads `22:00` .. `06:00 +1`.
//!
//! ```rust
//! use shiftgrid::libs::formatter::{format_minute_offset, format_duration_minutes};
//!
//! assert_eq!(format_minute_offset(1860), "07:00 +1");
//! assert_eq!(format_minute_offset(-30), "23:30 -1");
//! assert_eq!(format_duration_minutes(95), "01:35");
//! ```

use crate::libs::timebase::MINUTES_PER_DAY;
use crate::libs::timeline::TimeRange;

/// `HH:MM` of a minute offset, with `+N`/`-N` when it is not on the reference day.
pub fn format_minute_offset(minute: i64) -> String {
    let days = minute.div_euclid(MINUTES_PER_DAY);
    let in_day = minute.rem_euclid(MINUTES_PER_DAY);
    let clock = format!("{:02}:{:02}", in_day / 60, in_day % 60);

    match days {
        0 => clock,
        d if d > 0 => format!("{} +{}", clock, d),
        d => format!("{} {}", clock, d),
    }
}

/// `HH:MM` for a length in minutes; negative lengths print as `00:00`.
pub fn format_duration_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// `start - end` of a visible range.
pub fn format_range(range: &TimeRange) -> String {
    format!("{} - {}", format_minute_offset(range.start_min), format_minute_offset(range.end_min))
}
