//! Break overlap engine: who is on break in which slot, and how many staff
//! are actually present.
//!
//! ## Attendance Formula
//!
//! ```text
//! present = max(0, working - on_break)
//!
//! where:
//! - working  = shifts whose [sMin, eMin) overlaps the slot
//! - on_break = distinct people whose break overlaps the slot
//! ```
//!
//! People are counted, not break rows: someone with both a scheduled and an
//! actual break over the same slot is subtracted once.
//!
//! ## Break Sources
//!
//! Breaks come from the break list and from legacy `type: "break"` entries of
//! the shift list. [`merge_breaks`] concatenates both (break list first) and
//! keeps the first record of every record identity.

use crate::libs::record::{break_identity, BreakIdentity, BreakRecord, IdentityBasis};
use crate::libs::shift::Item;
use crate::libs::timebase::MinuteSpan;
use crate::libs::timeline::{Slot, SlotInterval, TimelineGrid};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Concatenates both break sources and drops later duplicates.
///
/// Order is preserved and fields are never merged: the first record seen for
/// an identity wins as-is.
pub fn merge_breaks(break_records: &[BreakRecord], shift_breaks: &[BreakRecord]) -> Vec<BreakRecord> {
    let mut seen = HashSet::new();
    let merged: Vec<BreakRecord> = break_records
        .iter()
        .chain(shift_breaks)
        .filter(|b| seen.insert(break_identity(b, IdentityBasis::Record)))
        .cloned()
        .collect();

    debug!(
        breaks = break_records.len(),
        embedded = shift_breaks.len(),
        merged = merged.len(),
        "merged break sources"
    );

    merged
}

/// A break placed on the minute axis of the selected day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedBreak {
    pub record: BreakRecord,
    pub span: MinuteSpan,
    pub person: BreakIdentity,
}

impl PlacedBreak {
    pub fn new(record: BreakRecord, reference: NaiveDate) -> Self {
        let span = MinuteSpan::from_break(record.start_time.as_deref(), record.end_time.as_deref(), reference);
        let person = break_identity(&record, IdentityBasis::Person);
        Self { record, span, person }
    }

    pub fn overlaps(&self, slot: &Slot) -> bool {
        self.span.overlaps(slot.start, slot.end)
    }

    /// Whether the break is attached to `item`, by user or by shift id.
    pub fn belongs_to(&self, item: &Item) -> bool {
        match (self.record.user_id, item.user_id()) {
            (Some(break_user), Some(row_user)) if break_user == row_user => true,
            _ => self.record.shift_detail_id == Some(item.id()),
        }
    }
}

/// Per-slot head counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotAttendance {
    pub slot_index: usize,
    pub start_min: i64,
    pub work_count: usize,
    pub break_count: usize,
    pub present: usize,
}

/// Merged breaks of one day, normalized once and queried per slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakOverlap {
    breaks: Vec<PlacedBreak>,
}

impl BreakOverlap {
    pub fn new(merged: &[BreakRecord], reference: NaiveDate) -> Self {
        let breaks: Vec<PlacedBreak> = merged.iter().map(|b| PlacedBreak::new(b.clone(), reference)).collect();

        for placed in breaks.iter().filter(|b| b.span.end.is_none()) {
            warn!(
                break_id = ?placed.record.id,
                start = ?placed.record.start_time,
                end = ?placed.record.end_time,
                "break end could not be parsed; ignoring it for overlap"
            );
        }

        Self { breaks }
    }

    pub fn breaks(&self) -> &[PlacedBreak] {
        &self.breaks
    }

    /// Breaks overlapping `slot`, in merge order.
    pub fn breaks_in<'a>(&'a self, slot: &'a Slot) -> impl Iterator<Item = &'a PlacedBreak> + 'a {
        self.breaks.iter().filter(move |b| b.overlaps(slot))
    }

    /// Number of distinct people on break during `slot`.
    pub fn break_count(&self, slot: &Slot) -> usize {
        self.breaks_in(slot).map(|b| &b.person).collect::<HashSet<_>>().len()
    }

    pub fn attendance(&self, slot: &Slot, items: &[Item]) -> SlotAttendance {
        let work_count = items.iter().filter(|i| i.covers(slot.start, slot.end)).count();
        let break_count = self.break_count(slot);

        SlotAttendance {
            slot_index: slot.index,
            start_min: slot.start,
            work_count,
            break_count,
            present: work_count.saturating_sub(break_count),
        }
    }

    /// Attendance for every cell of `grid`.
    pub fn attendance_series(&self, grid: &TimelineGrid, items: &[Item]) -> Vec<SlotAttendance> {
        grid.slots().map(|slot| self.attendance(&slot, items)).collect()
    }

    pub fn is_user_on_break(&self, user_id: i64, slot: &Slot) -> bool {
        self.breaks_in(slot).any(|b| b.record.user_id == Some(user_id))
    }

    /// First break of the row's person or shift that overlaps `slot`.
    pub fn row_break_in<'a>(&'a self, item: &'a Item, slot: &'a Slot) -> Option<&'a PlacedBreak> {
        self.breaks_in(slot).find(|b| b.belongs_to(item))
    }
}

/// Present head count for one slot.
pub fn slot_attendance(slot: &Slot, items: &[Item], merged: &[BreakRecord], reference: NaiveDate) -> usize {
    BreakOverlap::new(merged, reference).attendance(slot, items).present
}

/// Whether a break of `user_id` overlaps `slot`. Matches by user id only.
pub fn is_user_on_break_in_slot(user_id: i64, slot: &Slot, merged: &[BreakRecord], reference: NaiveDate) -> bool {
    BreakOverlap::new(merged, reference).is_user_on_break(user_id, slot)
}

/// Fractional column coordinates of a break bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualSpan {
    pub start_index: f64,
    pub end_index: f64,
}

impl VisualSpan {
    pub fn width(&self) -> f64 {
        (self.end_index - self.start_index).max(0.0)
    }
}

/// Column coordinates of a break, clipped at the left edge of the grid.
///
/// Returns `None` when either endpoint cannot be placed.
pub fn break_visual_span(
    record: &BreakRecord,
    timeline_start_min: i64,
    interval: SlotInterval,
    reference: NaiveDate,
) -> Option<VisualSpan> {
    let span = MinuteSpan::from_break(record.start_time.as_deref(), record.end_time.as_deref(), reference);
    let step = interval.minutes() as f64;
    let column = |minute: i64| ((minute - timeline_start_min) as f64 / step).max(0.0);

    Some(VisualSpan {
        start_index: column(span.start?),
        end_index: column(span.end?),
    })
}
