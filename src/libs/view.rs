use crate::libs::day::{CellState, DayTimeline, RowView};
use crate::libs::formatter::{format_duration_minutes, format_minute_offset};
use crate::libs::overlap::SlotAttendance;
use crate::libs::record::{BreakStatus, ShiftType};
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

/// Console tables for the day grid, its attendance line and break bars.
pub struct View {}

impl View {
    /// One character per cell: `#` working, `~` scheduled break, `B` actual
    /// break, `x` blocked break, `*` pending selection.
    pub fn cell_symbol(cell: &CellState) -> &'static str {
        match cell {
            CellState::Outside => " ",
            CellState::Working => "#",
            CellState::OnBreak { blocked: true, .. } => "x",
            CellState::OnBreak { status: BreakStatus::Actual, .. } => "B",
            CellState::OnBreak { status: BreakStatus::Scheduled, .. } => "~",
            CellState::Pending => "*",
        }
    }

    fn shift_type_label(shift_type: ShiftType) -> &'static str {
        match shift_type {
            ShiftType::Day => "day",
            ShiftType::Night => "night",
            ShiftType::Other => "-",
        }
    }

    fn row_label(row: &RowView) -> String {
        match row.user_id {
            Some(user) => format!("{} (user {})", row.id, user),
            None => row.id.to_string(),
        }
    }

    /// One line per shift row and a closing `PRESENT` line, one column per slot.
    pub fn grid(timeline: &DayTimeline) -> Result<()> {
        let grid = timeline.grid();
        let mut table = Table::new();

        let mut header = vec![Cell::new("SHIFT"), Cell::new("TYPE")];
        header.extend(grid.slots().map(|slot| Cell::new(&format_minute_offset(slot.start))));
        table.add_row(Row::new(header));

        for row in timeline.rows() {
            let mut cells = vec![
                Cell::new(&Self::row_label(&row)),
                Cell::new(Self::shift_type_label(row.shift_type)),
            ];
            cells.extend(row.cells.iter().map(|c| Cell::new(Self::cell_symbol(c))));
            table.add_row(Row::new(cells));
        }

        let mut present = vec![Cell::new("PRESENT"), Cell::new("")];
        present.extend(timeline.attendance().iter().map(|a| Cell::new(&a.present.to_string())));
        table.add_row(Row::new(present));

        table.printstd();
        Ok(())
    }

    /// Head counts per slot, one line each.
    pub fn attendance(attendance: &[SlotAttendance], interval: i64) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SLOT", "FROM", "TO", "WORKING", "ON BREAK", "PRESENT"]);
        for slot in attendance {
            table.add_row(row![
                slot.slot_index,
                format_minute_offset(slot.start_min),
                format_minute_offset(slot.start_min + interval),
                slot.work_count,
                slot.break_count,
                slot.present
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Break bars of each row with their real start, end and length, which
    /// may lie before the first column of the grid.
    pub fn breaks_table(timeline: &DayTimeline) -> Table {
        let mut table = Table::new();

        table.add_row(row!["SHIFT", "BREAK ID", "TYPE", "FROM", "TO", "DURATION"]);
        for row in timeline.rows() {
            for bar in &row.bars {
                let (Some(from), Some(to)) = (bar.minutes.start, bar.minutes.end) else {
                    continue;
                };
                table.add_row(row![
                    row.id,
                    bar.record.id.map_or_else(|| "-".to_string(), |id| id.to_string()),
                    bar.record.kind,
                    format_minute_offset(from),
                    format_minute_offset(to),
                    format_duration_minutes(to - from)
                ]);
            }
        }

        table
    }

    pub fn breaks(timeline: &DayTimeline) -> Result<()> {
        Self::breaks_table(timeline).printstd();
        Ok(())
    }
}
