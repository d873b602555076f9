//! Time base normalization for the day timeline.
//!
//! Every shift and break is placed on one signed minute axis anchored at the
//! midnight of a reference day. Values below zero belong to the previous day,
//! values of 1440 and above to the next one. All parsing here is tolerant:
//! malformed timestamps come back as `None` and never panic.
//!
//! ## Accepted Formats
//!
//! - `2024-01-10 09:30`, `2024-01-10T09:30:00`
//! - `2024/01/10 9:30`, `20240110T0930` is rejected (the minute needs a colon)
//! - `09:30` (time only; treated as the reference day)
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shiftgrid::libs::timebase::{to_minute_offset, to_storage_string};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! assert_eq!(to_minute_offset("2024-01-11 07:00", day), Some(1860));
//! assert_eq!(to_storage_string(1860, day).as_deref(), Some("2024-01-11 07:00:00"));
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use regex::Regex;
use std::sync::OnceLock;

/// Minutes in one calendar day on the naive wall-clock axis.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Format used for every timestamp handed to the persistence layer.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static DATE_TIME_PATTERN: OnceLock<Regex> = OnceLock::new();
static TIME_ONLY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn date_time_pattern() -> &'static Regex {
    DATE_TIME_PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(\d{4})[-/.]?(\d{2})[-/.]?(\d{2})(?:[T\s]+(\d{1,2}):(\d{2}))?")
            .expect("date-time pattern is a valid regex")
    })
}

fn time_only_pattern() -> &'static Regex {
    TIME_ONLY_PATTERN.get_or_init(|| Regex::new(r"^\s*(\d{1,2}):(\d{2})(?::\d{2})?\s*$").expect("time pattern is a valid regex"))
}

/// Time of day extracted from a timestamp, without any date attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
}

impl ClockTime {
    fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }
}

/// Extracts the time-of-day portion of a timestamp.
///
/// Returns `None` when no `HH:MM` part can be found or when the hour or
/// minute is out of range.
pub fn parse_clock(value: &str) -> Option<ClockTime> {
    if let Some(caps) = date_time_pattern().captures(value) {
        let hour = caps.get(4)?.as_str().parse().ok()?;
        let minute = caps.get(5)?.as_str().parse().ok()?;
        return ClockTime::new(hour, minute);
    }

    let caps = time_only_pattern().captures(value)?;
    ClockTime::new(caps[1].parse().ok()?, caps[2].parse().ok()?)
}

/// Extracts the calendar date portion of a timestamp as a naive local date.
pub fn parse_date_only(value: &str) -> Option<NaiveDate> {
    let caps = date_time_pattern().captures(value)?;
    NaiveDate::from_ymd_opt(caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?)
}

/// Whole-day difference between two dates, or `0` if either is missing.
pub fn day_offset(candidate: Option<NaiveDate>, reference: Option<NaiveDate>) -> i64 {
    match (candidate, reference) {
        (Some(candidate), Some(reference)) => candidate.signed_duration_since(reference).num_days(),
        _ => 0,
    }
}

/// Places a timestamp on the minute axis of `reference`.
///
/// A timestamp without a date part is taken to be on the reference day.
pub fn to_minute_offset(value: &str, reference: NaiveDate) -> Option<i64> {
    let clock = parse_clock(value)?;
    let days = day_offset(parse_date_only(value), Some(reference));
    Some(clock.minutes() + days * MINUTES_PER_DAY)
}

fn offset_of(value: Option<&str>, reference: NaiveDate) -> Option<i64> {
    value.and_then(|v| to_minute_offset(v, reference))
}

/// Converts a minute offset back into a storage timestamp.
///
/// Offsets beyond a single day move the date by calendar arithmetic, so
/// `-30` on 2024-03-01 yields `2024-02-29 23:30:00`.
pub fn to_storage_string(minute: i64, reference: NaiveDate) -> Option<String> {
    let midnight = NaiveDateTime::new(reference, NaiveTime::MIN);
    let moment = midnight.checked_add_signed(TimeDelta::try_minutes(minute)?)?;
    Some(moment.format(STORAGE_FORMAT).to_string())
}

/// A span on the minute axis whose endpoints may have failed to parse.
///
/// A missing end means the span has no usable duration and never overlaps
/// anything. A missing start with a known end is treated as open towards the
/// past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinuteSpan {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl MinuteSpan {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Shift endpoints: each side trusts its own date part.
    pub fn from_shift(start: Option<&str>, end: Option<&str>, reference: NaiveDate) -> Self {
        Self::new(offset_of(start, reference), offset_of(end, reference))
    }

    /// Break endpoints: an end that lands before the start is moved to the
    /// next day. Shifts never get this correction.
    pub fn from_break(start: Option<&str>, end: Option<&str>, reference: NaiveDate) -> Self {
        let start = offset_of(start, reference);
        let end = match (start, offset_of(end, reference)) {
            (Some(s), Some(e)) if e < s => Some(e + MINUTES_PER_DAY),
            (_, end) => end,
        };
        Self::new(start, end)
    }

    /// Length in minutes, when both endpoints are known.
    pub fn duration(&self) -> Option<i64> {
        Some(self.end? - self.start?)
    }

    /// Half-open overlap test against `[from, to)`.
    pub fn overlaps(&self, from: i64, to: i64) -> bool {
        match (self.start, self.end) {
            (_, None) => false,
            (None, Some(end)) => from < end,
            (Some(start), Some(end)) => start < to && from < end,
        }
    }
}

