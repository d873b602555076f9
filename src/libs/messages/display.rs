//! Text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === GRID MESSAGES ===
            Message::GridHeader { date, range, interval } => {
                format!("Shifts for {} ({}, {} min slots)", date, range, interval)
            }
            Message::NoShiftsForDate(date) => format!("No work shifts start on {}. Showing the default 09:00 - 18:00 range.", date),
            Message::ShiftRowsCount(count) => format!("{} shift rows", count),
            Message::BreaksMergedCount(count) => format!("{} breaks after merging both sources", count),

            // === ATTENDANCE MESSAGES ===
            Message::AttendanceHeader(date) => format!("Attendance for {}", date),
            Message::PeakAttendance { present, at } => format!("Peak attendance: {} staff at {}", present, at),

            // === SELECTION MESSAGES ===
            Message::BreakRequestCreated { row_id, start, end } => {
                format!("Break request for shift {}: {} - {}", row_id, start, end)
            }
            Message::SelectionArmed { row_id, index } => format!("Shift {} armed at slot {}", row_id, index),
            Message::SelectionIgnored { row_id, index } => {
                format!("Slot {} of shift {} is outside the shift or already holds a break", index, row_id)
            }
            Message::SelectionIncomplete => "Selection did not produce a break request.".to_string(),
            Message::RowNotFound(id) => format!("Shift {} is not on this day's grid", id),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully.".to_string(),
            Message::ConfigPath(path) => format!("Configuration file: {}", path),
            Message::InvalidTimelineConfig(reason) => format!("Invalid timeline configuration: {}", reason),

            // === INPUT MESSAGES ===
            Message::ShiftFileLoadFailed(reason) => format!("Failed to load shifts: {}", reason),
            Message::BreakFileLoadFailed(reason) => format!("Failed to load breaks: {}", reason),
            Message::InvalidDate(value) => format!("Invalid date '{}'. Use YYYY-MM-DD or 'today'.", value),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Attendance exported to {}", path),
            Message::ExportFailed(reason) => format!("Export failed: {}", reason),
        };
        write!(f, "{}", s)
    }
}
