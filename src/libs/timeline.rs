//! Visible time range and slot boundaries of the day grid.
//!
//! The grid spans the earliest start to the latest end of the day's shifts,
//! padded on both sides (more generously in break view, where early and late
//! breaks need room) and snapped outwards to slot boundaries.
//!
//! ```text
//!   padBefore      shifts         padAfter
//! |<-------->|=================|<--------->|
//! ^ snapped down                            ^ snapped up (+1 slot)
//! ```
//!
//! Shift ends past the end of the following day are cut off at
//! [`MAX_VISIBLE_END`] so a mistyped year cannot blow up the grid.

use crate::libs::error::TimelineError;
use crate::libs::shift::Item;
use crate::libs::timebase::MINUTES_PER_DAY;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Range shown when there is no shift on the selected day: 09:00 to 18:00.
pub const DEFAULT_RANGE: TimeRange = TimeRange { start_min: 540, end_min: 1080 };

/// Latest shift end the grid will stretch to: midnight at the end of the
/// following day. Later ends are treated as data errors and cut off here.
pub const MAX_VISIBLE_END: i64 = 2 * MINUTES_PER_DAY;

const MIN_SPAN: i64 = 120;
const WIDEN_BY: i64 = 60;

/// Width of one grid column in minutes; always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SlotInterval(i64);

impl SlotInterval {
    pub const DEFAULT_MINUTES: i64 = 15;

    pub fn new(minutes: i64) -> Result<Self, TimelineError> {
        if minutes > 0 {
            Ok(Self(minutes))
        } else {
            Err(TimelineError::InvalidInterval(minutes))
        }
    }

    pub fn minutes(&self) -> i64 {
        self.0
    }
}

impl Default for SlotInterval {
    fn default() -> Self {
        Self(Self::DEFAULT_MINUTES)
    }
}

impl TryFrom<i64> for SlotInterval {
    type Error = TimelineError;

    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<SlotInterval> for i64 {
    fn from(interval: SlotInterval) -> Self {
        interval.0
    }
}

/// Which padding set frames the grid: tight around shifts, or wider to
/// leave room for early and late breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Shift,
    Break,
}

impl ViewMode {
    pub fn default_padding(&self) -> Padding {
        match self {
            ViewMode::Shift => Padding { before: 60, after: 60 },
            ViewMode::Break => Padding { before: 120, after: 180 },
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ViewMode::Shift => write!(f, "shift"),
            ViewMode::Break => write!(f, "break"),
        }
    }
}

/// Minutes of empty grid kept before the first shift and after the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    pub before: i64,
    pub after: i64,
}

impl Padding {
    pub fn new(before: i64, after: i64) -> Result<Self, TimelineError> {
        let padding = Self { before, after };
        padding.validate()?;
        Ok(padding)
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.before < 0 || self.after < 0 {
            return Err(TimelineError::InvalidPadding {
                before: self.before,
                after: self.after,
            });
        }
        Ok(())
    }
}

/// Visible part of the minute axis, `[start_min, end_min)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_min: i64,
    pub end_min: i64,
}

impl TimeRange {
    /// Width in minutes.
    pub fn span(&self) -> i64 {
        self.end_min - self.start_min
    }
}

/// Visible range for `items` using the default padding of `mode`.
pub fn compute_range(items: &[Item], interval: SlotInterval, mode: ViewMode) -> TimeRange {
    compute_range_with(items, interval, mode.default_padding())
}

/// Visible range for `items` with explicit padding.
pub fn compute_range_with(items: &[Item], interval: SlotInterval, padding: Padding) -> TimeRange {
    if items.is_empty() {
        return DEFAULT_RANGE;
    }

    let step = interval.minutes();
    let min_start = items.iter().map(|i| i.s_min().unwrap_or(MINUTES_PER_DAY)).min().unwrap_or(MINUTES_PER_DAY);
    let mut max_end = items.iter().map(|i| i.e_min().unwrap_or(0)).max().unwrap_or(0);

    if max_end > MAX_VISIBLE_END {
        warn!(max_end, limit = MAX_VISIBLE_END, "shift ends beyond the next day; cutting the grid off");
        max_end = MAX_VISIBLE_END;
    }

    let raw_start = (min_start - padding.before).max(0);
    let raw_end = max_end + padding.after;

    let mut range = TimeRange {
        start_min: raw_start - raw_start.rem_euclid(step),
        end_min: raw_end - raw_end.rem_euclid(step) + step,
    };

    if range.span() < MIN_SPAN {
        range.start_min -= WIDEN_BY;
        range.end_min += WIDEN_BY;
    }

    range
}

/// Slot boundaries from `start_min` at `interval` spacing.
///
/// Yields `step_count + 1` boundaries where
/// `step_count = ceil((end_min - start_min) / interval)`.
pub fn build_slots(start_min: i64, end_min: i64, interval: SlotInterval) -> Vec<i64> {
    let step = interval.minutes();
    let span = (end_min - start_min).max(0);
    let step_count = (span + step - 1) / step;
    (0..=step_count).map(|i| start_min + i * step).collect()
}

/// One half-open grid cell `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub start: i64,
    pub end: i64,
}

/// The computed time axis of a day grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineGrid {
    range: TimeRange,
    interval: SlotInterval,
    boundaries: Vec<i64>,
}

impl TimelineGrid {
    pub fn new(items: &[Item], interval: SlotInterval, padding: Padding) -> Self {
        Self::from_range(compute_range_with(items, interval, padding), interval)
    }

    pub fn from_range(range: TimeRange, interval: SlotInterval) -> Self {
        let boundaries = build_slots(range.start_min, range.end_min, interval);
        Self { range, interval, boundaries }
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn interval(&self) -> SlotInterval {
        self.interval
    }

    pub fn start_min(&self) -> i64 {
        self.range.start_min
    }

    pub fn boundaries(&self) -> &[i64] {
        &self.boundaries
    }

    /// Number of cells; one less than the number of boundaries.
    pub fn slot_count(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    /// Minute offset of boundary `index`, which may lie past the last cell.
    pub fn boundary(&self, index: usize) -> i64 {
        self.range.start_min + index as i64 * self.interval.minutes()
    }

    pub fn slot(&self, index: usize) -> Option<Slot> {
        (index < self.slot_count()).then(|| Slot {
            index,
            start: self.boundary(index),
            end: self.boundary(index) + self.interval.minutes(),
        })
    }

    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        (0..self.slot_count()).filter_map(|i| self.slot(i))
    }
}
