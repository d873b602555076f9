//! Two-click break range selection on a shift row.
//!
//! The first click on an open slot arms the row, the second click on the same
//! row closes the range and yields a break-creation request. Clicking another
//! row re-arms there and silently drops the earlier anchor; merely moving
//! the pointer onto another row cancels the selection.
//!
//! ```text
//!            click(open) / arm           click(same row) / emit request
//!   Idle ─────────────────────────▶ Armed ─────────────────────────────▶ Idle
//!                                    │ ▲  │
//!                                    └─┘  └──────▶ Idle
//!                     click(other row) / re-arm    hover(other row) / cancel
//! ```
//!
//! Clicks on slots outside the row's shift or on blocked slots never change
//! the state. The transition itself is the pure [`transition`] function;
//! [`BreakSelection`] adds hover tracking and turns closed ranges into
//! requests.

use crate::libs::record::{BreakRequest, BreakType};
use crate::libs::timebase::to_storage_string;
use crate::libs::timeline::TimelineGrid;
use chrono::NaiveDate;
use std::ops::RangeInclusive;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Armed { row_id: i64, start_index: usize },
}

/// Whether a slot of a row can take part in a new break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Open,
    /// The slot lies outside the row's shift.
    Outside,
    /// The slot already holds a break the current break type cannot overlap.
    Blocked,
}

/// Answers slot availability for the rows of a grid.
pub trait SlotAvailability {
    fn slot_status(&self, row_id: i64, index: usize) -> SlotStatus;
}

/// A completed selection in slot indices; `end_index` is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosedRange {
    pub row_id: i64,
    pub start_index: usize,
    pub end_index: usize,
}

/// Pure click transition.
pub fn transition(state: SelectionState, row_id: i64, index: usize, status: SlotStatus) -> (SelectionState, Option<ClosedRange>) {
    if status != SlotStatus::Open {
        return (state, None);
    }

    match state {
        SelectionState::Armed { row_id: armed_row, start_index } if armed_row == row_id => {
            let range = ClosedRange {
                row_id,
                start_index: start_index.min(index),
                end_index: start_index.max(index) + 1,
            };
            (SelectionState::Idle, Some(range))
        }
        _ => (SelectionState::Armed { row_id, start_index: index }, None),
    }
}

/// Everything needed to turn slot indices into storage timestamps.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    pub grid: &'a TimelineGrid,
    pub reference: NaiveDate,
    pub break_type: BreakType,
}

impl SelectionContext<'_> {
    pub fn request_for(&self, range: ClosedRange) -> Option<BreakRequest> {
        let start = self.grid.boundary(range.start_index);
        let end = self.grid.boundary(range.end_index);

        Some(BreakRequest {
            shift_detail_id: range.row_id,
            start_time: to_storage_string(start, self.reference)?,
            end_time: to_storage_string(end, self.reference)?,
            kind: self.break_type,
        })
    }
}

/// Interaction-local selection state with live hover tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakSelection {
    state: SelectionState,
    hover_index: Option<usize>,
}

impl BreakSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Idle;
        self.hover_index = None;
    }

    /// Handles a click and returns a request when it completes a range.
    pub fn click(
        &mut self,
        row_id: i64,
        index: usize,
        context: &SelectionContext<'_>,
        availability: &impl SlotAvailability,
    ) -> Option<BreakRequest> {
        let status = availability.slot_status(row_id, index);
        let (next, closed) = transition(self.state, row_id, index, status);

        if status != SlotStatus::Open {
            trace!(row_id, index, ?status, "ignored slot click");
            return None;
        }

        if let (SelectionState::Armed { row_id: previous, .. }, SelectionState::Armed { .. }) = (self.state, next) {
            if previous != row_id {
                debug!(from = previous, to = row_id, "selection moved to another row");
                self.hover_index = None;
            }
        }

        self.state = next;
        let range = closed?;
        self.hover_index = None;

        let request = context.request_for(range);
        match &request {
            Some(req) => debug!(
                row_id,
                start = %req.start_time,
                end = %req.end_time,
                kind = %req.kind,
                "break range selected"
            ),
            None => warn!(row_id, ?range, "selected range falls outside the representable calendar"),
        }
        request
    }

    /// Tracks the pointer while armed.
    ///
    /// Open slots of the armed row move the hover mark; blocked or outside
    /// slots of that row leave it. Moving onto another row cancels the
    /// selection.
    pub fn hover(&mut self, row_id: i64, index: usize, availability: &impl SlotAvailability) {
        let SelectionState::Armed { row_id: armed_row, .. } = self.state else {
            return;
        };

        if armed_row != row_id {
            debug!(armed = armed_row, row_id, "pointer left the armed row; selection cancelled");
            self.reset();
        } else if availability.slot_status(row_id, index) == SlotStatus::Open {
            self.hover_index = Some(index);
        }
    }

    /// Slots marked as the pending range on `row_id`.
    pub fn pending_range(&self, row_id: i64) -> Option<RangeInclusive<usize>> {
        match self.state {
            SelectionState::Armed { row_id: armed_row, start_index } if armed_row == row_id => {
                let hover = self.hover_index.unwrap_or(start_index);
                Some(start_index.min(hover)..=start_index.max(hover))
            }
            _ => None,
        }
    }

    pub fn is_pending(&self, row_id: i64, index: usize) -> bool {
        self.pending_range(row_id).is_some_and(|range| range.contains(&index))
    }
}
