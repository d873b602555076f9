pub mod attendance;
pub mod config;
pub mod grid;
pub mod select;

use crate::libs::config::Config;
use crate::libs::day::{DayTimeline, ViewConfig};
use crate::libs::input::{load_breaks, load_shifts, parse_selected_date};
use crate::libs::messages::Message;
use crate::libs::record::BreakType;
use crate::libs::timeline::{SlotInterval, ViewMode};
use crate::msg_error_anyhow;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inputs and view parameters shared by every grid command.
#[derive(Debug, Args)]
pub struct DayArgs {
    #[arg(long, short, help = "JSON file with the shift list")]
    pub shifts: PathBuf,
    #[arg(long, short, help = "JSON file with the break list (optional)")]
    pub breaks: Option<PathBuf>,
    #[arg(long, short, default_value = "today", help = "Day to show (YYYY-MM-DD or 'today')")]
    pub date: String,
    #[arg(long, short, help = "Slot width in minutes (overrides config)")]
    pub interval: Option<i64>,
    #[arg(long, short, value_enum, help = "Padding set to use (overrides config)")]
    pub mode: Option<ViewMode>,
    #[arg(long = "type", short = 't', value_enum, help = "Break type to author (overrides config)")]
    pub break_type: Option<BreakType>,
}

impl DayArgs {
    /// Config file values with this invocation's flags applied on top.
    pub fn view_config(&self, config: &Config) -> Result<ViewConfig> {
        let mut view = config
            .timeline_or_default()
            .view_config()
            .map_err(|e| msg_error_anyhow!(Message::InvalidTimelineConfig(e.to_string())))?;

        if let Some(minutes) = self.interval {
            view.interval = SlotInterval::new(minutes)?;
        }
        if let Some(mode) = self.mode {
            view.mode = mode;
        }
        if let Some(break_type) = self.break_type {
            view.break_type = break_type;
        }
        Ok(view)
    }

    pub fn load_timeline(&self) -> Result<DayTimeline> {
        let config = Config::read()?;
        let view = self.view_config(&config)?;
        let date = parse_selected_date(&self.date).map_err(|_| msg_error_anyhow!(Message::InvalidDate(self.date.clone())))?;

        let shifts = load_shifts(&self.shifts).map_err(|e| msg_error_anyhow!(Message::ShiftFileLoadFailed(format!("{:#}", e))))?;
        let breaks = match &self.breaks {
            Some(path) => load_breaks(path).map_err(|e| msg_error_anyhow!(Message::BreakFileLoadFailed(format!("{:#}", e))))?,
            None => Vec::new(),
        };

        Ok(DayTimeline::new(shifts, breaks, date, view))
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Render the shift grid of a day")]
    Grid(grid::GridArgs),
    #[command(about = "Show or export staff present per slot")]
    Attendance(attendance::AttendanceArgs),
    #[command(about = "Select a break range on a shift row by two slot clicks")]
    Select(select::SelectArgs),
    #[command(about = "Show or save the timeline configuration")]
    Config(config::ConfigArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Grid(args) => grid::cmd(args),
            Commands::Attendance(args) => attendance::cmd(args),
            Commands::Select(args) => select::cmd(args),
            Commands::Config(args) => config::cmd(args),
        }
    }
}
