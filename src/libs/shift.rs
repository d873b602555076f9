//! Builds the ordered row set of a day grid from the raw shift list.
//!
//! Only work entries whose own start date is the selected day become rows.
//! A night shift that began the evening before is left to the previous
//! day's view even though it reaches into this one.

use crate::libs::record::{RecordKind, ShiftRecord};
use crate::libs::timebase::MinuteSpan;
use chrono::NaiveDate;
use std::cmp::Ordering;
use tracing::debug;

/// A work shift placed on the minute axis of the selected day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub record: ShiftRecord,
    pub span: MinuteSpan,
}

impl Item {
    pub fn new(record: ShiftRecord, reference: NaiveDate) -> Self {
        let span = MinuteSpan::from_shift(record.start_time.as_deref(), record.end_time.as_deref(), reference);
        Self { record, span }
    }

    pub fn id(&self) -> i64 {
        self.record.id
    }

    pub fn user_id(&self) -> Option<i64> {
        self.record.effective_user_id()
    }

    pub fn s_min(&self) -> Option<i64> {
        self.span.start
    }

    pub fn e_min(&self) -> Option<i64> {
        self.span.end
    }

    pub fn start_raw(&self) -> &str {
        self.record.start_time.as_deref().unwrap_or_default()
    }

    pub fn end_raw(&self) -> &str {
        self.record.end_time.as_deref().unwrap_or_default()
    }

    /// Whether this shift covers any part of `[from, to)`.
    pub fn covers(&self, from: i64, to: i64) -> bool {
        self.span.overlaps(from, to)
    }
}

/// Row order: shift type rank, then user id, then raw start time.
///
/// Missing user ids sort after present ones. The record id breaks any
/// remaining tie so the order is total.
pub fn compare_items(a: &Item, b: &Item) -> Ordering {
    a.record
        .shift_type
        .rank()
        .cmp(&b.record.shift_type.rank())
        .then_with(|| compare_user_ids(a.user_id(), b.user_id()))
        .then_with(|| a.start_raw().cmp(b.start_raw()))
        .then_with(|| a.id().cmp(&b.id()))
}

fn compare_user_ids(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Filters, normalizes and orders the work shifts of `selected`.
pub fn build_items(records: &[ShiftRecord], selected: NaiveDate) -> Vec<Item> {
    let mut items: Vec<Item> = records
        .iter()
        .filter(|r| r.kind == RecordKind::Work)
        .filter(|r| r.effective_date() == Some(selected))
        .map(|r| Item::new(r.clone(), selected))
        .collect();

    items.sort_by(compare_items);

    debug!(
        total = records.len(),
        rows = items.len(),
        date = %selected,
        "built shift rows"
    );

    items
}
