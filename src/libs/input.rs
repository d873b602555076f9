//! Loading shift and break lists exported by the scheduling backend.
//!
//! Both files are JSON arrays of records. Records are deserialized leniently
//! (see [`crate::libs::record`]) and an entry that still does not fit is
//! dropped, but a file that is not a JSON array is an error.

use crate::libs::error::TimelineError;
use crate::libs::record::{BreakRecord, ShiftRecord};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a JSON array of records. Entries that do not fit the record shape
/// are skipped with a warning; only a file that is not an array fails.
fn load_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let entries: Vec<Value> = serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))?;
    let total = entries.len();

    let records: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(path = %path.display(), index, error = %e, "skipping malformed record");
                None
            }
        })
        .collect();

    debug!(path = %path.display(), total, count = records.len(), "loaded records");
    Ok(records)
}

/// Loads the shift list, legacy break entries included.
pub fn load_shifts(path: &Path) -> Result<Vec<ShiftRecord>> {
    load_list(path)
}

/// Loads the break list; a file that does not exist means no breaks yet.
pub fn load_breaks(path: &Path) -> Result<Vec<BreakRecord>> {
    if !path.exists() {
        debug!(path = %path.display(), "no break file, starting empty");
        return Ok(Vec::new());
    }
    load_list(path)
}

/// Parses `YYYY-MM-DD` or the word `today`.
pub fn parse_selected_date(value: &str) -> Result<NaiveDate, TimelineError> {
    if value.trim().eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| TimelineError::InvalidDate(value.to_string()))
}
