//! Configuration for the day timeline.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file is not an error: every setting has a
//! default, and command-line flags override the file per invocation.
//!
//! ## File Layout
//!
//! ```json
//! {
//!   "timeline": {
//!     "interval": 15,
//!     "mode": "shift",
//!     "break_type": "planned",
//!     "shift_padding": { "before": 60, "after": 60 },
//!     "break_padding": { "before": 120, "after": 180 }
//!   }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftgrid::libs::config::Config;
//!
//! let config = Config::read()?;
//! let view = config.timeline_or_default().view_config()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::day::ViewConfig;
use crate::libs::error::TimelineError;
use crate::libs::record::BreakType;
use crate::libs::timeline::{Padding, SlotInterval, ViewMode};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Grid settings.
///
/// The interval is kept as a plain number here so a bad value in the file
/// surfaces as a [`TimelineError`] from [`TimelineConfig::validate`] rather
/// than as an opaque parse failure.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TimelineConfig {
    /// Slot width in minutes.
    #[serde(default = "default_interval")]
    pub interval: i64,

    /// Which padding set the grid uses.
    #[serde(default)]
    pub mode: ViewMode,

    /// Break type authored by slot selection.
    #[serde(default)]
    pub break_type: BreakType,

    #[serde(default = "shift_padding")]
    pub shift_padding: Padding,

    #[serde(default = "break_padding")]
    pub break_padding: Padding,
}

fn default_interval() -> i64 {
    SlotInterval::DEFAULT_MINUTES
}

fn shift_padding() -> Padding {
    ViewMode::Shift.default_padding()
}

fn break_padding() -> Padding {
    ViewMode::Break.default_padding()
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            interval: SlotInterval::DEFAULT_MINUTES,
            mode: ViewMode::Shift,
            break_type: BreakType::Planned,
            shift_padding: shift_padding(),
            break_padding: break_padding(),
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> Result<(), TimelineError> {
        SlotInterval::new(self.interval)?;
        self.shift_padding.validate()?;
        self.break_padding.validate()
    }

    /// Validated view parameters for a [`crate::libs::day::DayTimeline`].
    pub fn view_config(&self) -> Result<ViewConfig, TimelineError> {
        self.validate()?;
        Ok(ViewConfig {
            interval: SlotInterval::new(self.interval)?,
            mode: self.mode,
            break_type: self.break_type,
            shift_padding: self.shift_padding,
            break_padding: self.break_padding,
        })
    }
}

/// Root of `config.json`. Sections are optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineConfig>,
}

impl Config {
    /// Loads `config.json`, or the default configuration if there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)
            .with_context(|| format!("failed to read {}", config_file_path.display()))?;
        let config: Config = serde_json::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", config_file_path.display()))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn timeline_or_default(&self) -> TimelineConfig {
        self.timeline.clone().unwrap_or_default()
    }
}
