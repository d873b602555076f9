//! Per-slot attendance: shifts covering the slot, distinct people on break
//! and the resulting number of staff present.

use super::DayArgs;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::formatter::format_minute_offset;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AttendanceArgs {
    #[command(flatten)]
    day: DayArgs,
    #[arg(long, short, value_enum, help = "Write the attendance to a file instead of printing it")]
    export: Option<ExportFormat>,
    #[arg(long, short, help = "Output file for --export")]
    output: Option<PathBuf>,
}

pub fn cmd(args: AttendanceArgs) -> Result<()> {
    let timeline = args.day.load_timeline()?;

    if let Some(format) = args.export {
        let exporter = Exporter::new(format, args.output);
        exporter
            .export(&timeline)
            .map_err(|e| msg_error_anyhow!(Message::ExportFailed(format!("{:#}", e))))?;
        msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
        return Ok(());
    }

    let attendance = timeline.attendance();
    msg_print!(Message::AttendanceHeader(timeline.date().format("%Y-%m-%d").to_string()), true);
    View::attendance(&attendance, timeline.grid().interval().minutes())?;

    // First slot wins on ties.
    if let Some(peak) = attendance.iter().rev().max_by_key(|a| a.present) {
        msg_info!(Message::PeakAttendance {
            present: peak.present,
            at: format_minute_offset(peak.start_min),
        });
    }

    Ok(())
}
