//! The day view: one selected date, its shift rows, break bars, attendance
//! line and the live break selection.
//!
//! All derived data is rebuilt from the inputs whenever an input or a view
//! parameter changes. The only state that survives a recompute is the
//! selection, and it is cleared whenever slot indices stop meaning the same
//! thing (new date, new interval, new mode).

use crate::libs::overlap::{break_visual_span, merge_breaks, BreakOverlap, SlotAttendance, VisualSpan};
use crate::libs::record::{embedded_breaks, BreakRecord, BreakRequest, BreakStatus, BreakType, ShiftRecord, ShiftType};
use crate::libs::selection::{BreakSelection, SelectionContext, SlotAvailability, SlotStatus};
use crate::libs::shift::{build_items, Item};
use crate::libs::timebase::MinuteSpan;
use crate::libs::timeline::{Padding, SlotInterval, TimelineGrid, ViewMode};
use chrono::NaiveDate;
use tracing::debug;

/// View parameters of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub interval: SlotInterval,
    pub mode: ViewMode,
    pub break_type: BreakType,
    pub shift_padding: Padding,
    pub break_padding: Padding,
}

impl ViewConfig {
    pub fn padding(&self) -> Padding {
        match self.mode {
            ViewMode::Shift => self.shift_padding,
            ViewMode::Break => self.break_padding,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            interval: SlotInterval::default(),
            mode: ViewMode::default(),
            break_type: BreakType::default(),
            shift_padding: ViewMode::Shift.default_padding(),
            break_padding: ViewMode::Break.default_padding(),
        }
    }
}

/// What one grid cell of a shift row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// The slot lies outside the row's shift.
    Outside,
    Working,
    /// A break of the row's person or shift covers the slot. `blocked` is set
    /// when the break type being authored cannot overlap it.
    OnBreak { status: BreakStatus, blocked: bool },
    /// Part of the range being selected.
    Pending,
}

/// A break drawn as a bar across the cells of its row.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakBar {
    pub record: BreakRecord,
    /// Column coordinates, clipped at the left edge of the grid.
    pub span: VisualSpan,
    /// Unclipped position on the minute axis.
    pub minutes: MinuteSpan,
}

/// Render-ready state of one shift row: one [`CellState`] per grid slot
/// plus the bars of the breaks attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: i64,
    pub user_id: Option<i64>,
    pub shift_type: ShiftType,
    pub start_raw: String,
    pub end_raw: String,
    pub cells: Vec<CellState>,
    pub bars: Vec<BreakBar>,
}

/// Input events of the view, in the order the user produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineEvent {
    SlotClicked { row_id: i64, index: usize },
    SlotHovered { row_id: i64, index: usize },
    RowClicked(i64),
    Reset,
}

/// What the view hands to the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineOutput {
    CreateBreak(BreakRequest),
    RowClicked(i64),
}

/// The grid of one selected day and the interaction state on top of it.
///
/// Inputs are owned; every derived value is rebuilt by the setters.
#[derive(Debug, Clone)]
pub struct DayTimeline {
    shifts: Vec<ShiftRecord>,
    breaks: Vec<BreakRecord>,
    date: NaiveDate,
    config: ViewConfig,
    items: Vec<Item>,
    grid: TimelineGrid,
    merged: Vec<BreakRecord>,
    overlap: BreakOverlap,
    selection: BreakSelection,
}

impl DayTimeline {
    pub fn new(shifts: Vec<ShiftRecord>, breaks: Vec<BreakRecord>, date: NaiveDate, config: ViewConfig) -> Self {
        let items = build_items(&shifts, date);
        let grid = TimelineGrid::new(&items, config.interval, config.padding());
        let merged = merge_breaks(&breaks, &embedded_breaks(&shifts));
        let overlap = BreakOverlap::new(&merged, date);

        Self {
            shifts,
            breaks,
            date,
            config,
            items,
            grid,
            merged,
            overlap,
            selection: BreakSelection::new(),
        }
    }

    fn recompute(&mut self) {
        self.items = build_items(&self.shifts, self.date);
        self.grid = TimelineGrid::new(&self.items, self.config.interval, self.config.padding());
        self.merged = merge_breaks(&self.breaks, &embedded_breaks(&self.shifts));
        self.overlap = BreakOverlap::new(&self.merged, self.date);

        debug!(
            date = %self.date,
            rows = self.items.len(),
            slots = self.grid.slot_count(),
            breaks = self.merged.len(),
            "recomputed day timeline"
        );
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn grid(&self) -> &TimelineGrid {
        &self.grid
    }

    pub fn merged_breaks(&self) -> &[BreakRecord] {
        &self.merged
    }

    pub fn selection(&self) -> &BreakSelection {
        &self.selection
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.selection.reset();
        self.recompute();
    }

    pub fn set_interval(&mut self, interval: SlotInterval) {
        self.config.interval = interval;
        self.selection.reset();
        self.recompute();
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.config.mode = mode;
        self.selection.reset();
        self.recompute();
    }

    pub fn set_break_type(&mut self, break_type: BreakType) {
        self.config.break_type = break_type;
    }

    pub fn replace_shifts(&mut self, shifts: Vec<ShiftRecord>) {
        self.shifts = shifts;
        self.recompute();
    }

    pub fn replace_breaks(&mut self, breaks: Vec<BreakRecord>) {
        self.breaks = breaks;
        self.recompute();
    }

    fn item(&self, row_id: i64) -> Option<&Item> {
        self.items.iter().find(|i| i.id() == row_id)
    }

    /// The attendance line: one entry per grid slot.
    pub fn attendance(&self) -> Vec<SlotAttendance> {
        self.overlap.attendance_series(&self.grid, &self.items)
    }

    fn cell_state(&self, item: &Item, index: usize) -> CellState {
        let Some(slot) = self.grid.slot(index) else {
            return CellState::Outside;
        };
        if !item.covers(slot.start, slot.end) {
            return CellState::Outside;
        }
        if self.selection.is_pending(item.id(), index) {
            return CellState::Pending;
        }
        match self.overlap.row_break_in(item, &slot) {
            Some(placed) => CellState::OnBreak {
                status: placed.record.status,
                blocked: self.config.break_type != BreakType::Actual,
            },
            None => CellState::Working,
        }
    }

    fn bars_for(&self, item: &Item) -> Vec<BreakBar> {
        self.overlap
            .breaks()
            .iter()
            .filter(|b| b.belongs_to(item))
            .filter_map(|b| {
                break_visual_span(&b.record, self.grid.start_min(), self.grid.interval(), self.date).map(|span| BreakBar {
                    record: b.record.clone(),
                    span,
                    minutes: b.span,
                })
            })
            .collect()
    }

    /// Rows in display order with their cell states and break bars.
    pub fn rows(&self) -> Vec<RowView> {
        self.items
            .iter()
            .map(|item| RowView {
                id: item.id(),
                user_id: item.user_id(),
                shift_type: item.record.shift_type,
                start_raw: item.start_raw().to_string(),
                end_raw: item.end_raw().to_string(),
                cells: (0..self.grid.slot_count()).map(|i| self.cell_state(item, i)).collect(),
                bars: self.bars_for(item),
            })
            .collect()
    }

    /// Applies one user event. Returns what the caller must act on, if anything.
    pub fn handle(&mut self, event: TimelineEvent) -> Option<TimelineOutput> {
        match event {
            TimelineEvent::SlotClicked { row_id, index } => {
                let context = SelectionContext {
                    grid: &self.grid,
                    reference: self.date,
                    break_type: self.config.break_type,
                };
                let availability = RowAvailability {
                    items: &self.items,
                    grid: &self.grid,
                    overlap: &self.overlap,
                    break_type: self.config.break_type,
                };
                self.selection
                    .click(row_id, index, &context, &availability)
                    .map(TimelineOutput::CreateBreak)
            }
            TimelineEvent::SlotHovered { row_id, index } => {
                let availability = RowAvailability {
                    items: &self.items,
                    grid: &self.grid,
                    overlap: &self.overlap,
                    break_type: self.config.break_type,
                };
                self.selection.hover(row_id, index, &availability);
                None
            }
            TimelineEvent::RowClicked(row_id) => self.item(row_id).map(|i| TimelineOutput::RowClicked(i.id())),
            TimelineEvent::Reset => {
                self.selection.reset();
                None
            }
        }
    }
}

/// Slot availability over the current rows, borrowed separately from the
/// selection so both can be used at once.
struct RowAvailability<'a> {
    items: &'a [Item],
    grid: &'a TimelineGrid,
    overlap: &'a BreakOverlap,
    break_type: BreakType,
}

impl SlotAvailability for RowAvailability<'_> {
    fn slot_status(&self, row_id: i64, index: usize) -> SlotStatus {
        let Some(item) = self.items.iter().find(|i| i.id() == row_id) else {
            return SlotStatus::Outside;
        };
        let Some(slot) = self.grid.slot(index) else {
            return SlotStatus::Outside;
        };
        if !item.covers(slot.start, slot.end) {
            return SlotStatus::Outside;
        }
        if self.break_type != BreakType::Actual && self.overlap.row_break_in(item, &slot).is_some() {
            return SlotStatus::Blocked;
        }
        SlotStatus::Open
    }
}

impl SlotAvailability for DayTimeline {
    fn slot_status(&self, row_id: i64, index: usize) -> SlotStatus {
        RowAvailability {
            items: &self.items,
            grid: &self.grid,
            overlap: &self.overlap,
            break_type: self.config.break_type,
        }
        .slot_status(row_id, index)
    }
}
