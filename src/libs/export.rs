//! Attendance export for spreadsheets and other tools.
//!
//! Writes one line per grid slot with its working, on-break and present
//! counts, as CSV, JSON or an Excel workbook.
//!
//! ```rust,no_run
//! use shiftgrid::libs::export::{ExportFormat, Exporter};
//! # let timeline: shiftgrid::libs::day::DayTimeline = unimplemented!();
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&timeline)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::day::DayTimeline;
use crate::libs::formatter::format_minute_offset;
use crate::libs::timebase::to_storage_string;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Supported output file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    /// File extension used for generated file names.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Head counts of one grid slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSlot {
    pub index: usize,
    /// Slot start as `HH:MM`, with a day marker off the selected day.
    pub label: String,
    /// Slot start as a storage timestamp.
    pub start: String,
    pub working: usize,
    pub on_break: usize,
    pub present: usize,
}

/// The attendance line of one day, as written to every format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportAttendance {
    pub date: String,
    pub interval: i64,
    pub slots: Vec<ExportSlot>,
}

impl ExportAttendance {
    pub fn from_timeline(timeline: &DayTimeline) -> Self {
        let slots = timeline
            .attendance()
            .into_iter()
            .map(|a| ExportSlot {
                index: a.slot_index,
                label: format_minute_offset(a.start_min),
                start: to_storage_string(a.start_min, timeline.date()).unwrap_or_default(),
                working: a.work_count,
                on_break: a.break_count,
                present: a.present,
            })
            .collect();

        Self {
            date: timeline.date().format("%Y-%m-%d").to_string(),
            interval: timeline.grid().interval().minutes(),
            slots,
        }
    }
}

/// Writes a day's attendance to a file in the chosen format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named
    /// `shiftgrid_attendance_YYYYMMDD_HHMMSS.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("shiftgrid_attendance_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the attendance of `timeline`, replacing any existing file.
    pub fn export(&self, timeline: &DayTimeline) -> Result<()> {
        let attendance = ExportAttendance::from_timeline(timeline);
        match self.format {
            ExportFormat::Csv => self.export_csv(&attendance),
            ExportFormat::Json => self.export_json(&attendance),
            ExportFormat::Excel => self.export_excel(&attendance),
        }
    }

    fn export_csv(&self, attendance: &ExportAttendance) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Slot", "Time", "Start", "Working", "On break", "Present"])?;
        for slot in &attendance.slots {
            wtr.write_record([
                slot.index.to_string(),
                slot.label.clone(),
                slot.start.clone(),
                slot.working.to_string(),
                slot.on_break.to_string(),
                slot.present.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, attendance: &ExportAttendance) -> Result<()> {
        let json = serde_json::to_string_pretty(attendance)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, attendance: &ExportAttendance) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "ATTENDANCE", &header_format)?;
        worksheet.write_string(0, 1, &attendance.date)?;
        worksheet.write_string(0, 2, &format!("{} min slots", attendance.interval))?;

        for (col, title) in ["Slot", "Time", "Start", "Working", "On break", "Present"].iter().enumerate() {
            worksheet.write_string_with_format(2, col as u16, *title, &header_format)?;
        }

        let mut row = 3;
        for slot in &attendance.slots {
            worksheet.write_number(row, 0, slot.index as f64)?;
            worksheet.write_string(row, 1, &slot.label)?;
            worksheet.write_string(row, 2, &slot.start)?;
            worksheet.write_number(row, 3, slot.working as f64)?;
            worksheet.write_number(row, 4, slot.on_break as f64)?;
            worksheet.write_number(row, 5, slot.present as f64)?;
            row += 1;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
