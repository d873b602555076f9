//! Shift and break records as handed over by the scheduling backend.
//!
//! These are the only loosely-shaped values in the crate. Ids may arrive as
//! numbers or numeric strings, timestamps may be missing, and the shift list
//! may carry legacy break entries next to work entries. Everything past this
//! module works on the normalized forms built in [`crate::libs::shift`] and
//! [`crate::libs::overlap`].

use crate::libs::timebase::parse_date_only;
use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientId {
    Number(i64),
    Text(String),
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientId>::deserialize(deserializer)? {
        Some(LenientId::Number(id)) => Some(id),
        Some(LenientId::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

/// Like [`lenient_id`] for ids that must be present.
fn required_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match LenientId::deserialize(deserializer)? {
        LenientId::Number(id) => Ok(id),
        LenientId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("record id '{}' is not a number", text))),
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whether a shift list entry is attendance or a legacy break.
///
/// Any other `type` lands in `Other` and is neither a row nor a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Work,
    Break,
    #[serde(other)]
    Other,
}

/// Shift category from the scheduling backend; decides row order.
///
/// Unknown categories deserialize as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Day,
    Night,
    #[default]
    #[serde(other)]
    Other,
}

impl ShiftType {
    /// Row ordering rank: day shifts first, night shifts last.
    pub fn rank(&self) -> u8 {
        match self {
            ShiftType::Day => 0,
            ShiftType::Other => 1,
            ShiftType::Night => 2,
        }
    }
}

/// Nested `user` object some backends send instead of `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
}

/// One entry of the shift list for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    #[serde(deserialize_with = "required_id")]
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: RecordKind,
    #[serde(default, deserialize_with = "nullable")]
    pub shift_type: ShiftType,
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRef>,
    /// Calendar day of the shift, used when `start_time` has no date part.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl ShiftRecord {
    /// `user_id`, else the id of the nested `user`.
    pub fn effective_user_id(&self) -> Option<i64> {
        self.user_id.or_else(|| self.user.as_ref().and_then(|u| u.id))
    }

    /// The day this shift belongs to: the date of `start_time`, else `date`.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.start_time
            .as_deref()
            .and_then(parse_date_only)
            .or_else(|| self.date.as_deref().and_then(parse_date_only))
    }

    /// Converts a legacy break entry into a break record.
    ///
    /// Returns `None` for work entries.
    pub fn to_break_record(&self) -> Option<BreakRecord> {
        (self.kind == RecordKind::Break).then(|| BreakRecord {
            id: Some(self.id),
            shift_detail_id: None,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            kind: BreakType::Planned,
            status: BreakStatus::Scheduled,
            user_id: self.effective_user_id(),
        })
    }
}

/// Collects the legacy break entries of a shift list.
pub fn embedded_breaks(records: &[ShiftRecord]) -> Vec<BreakRecord> {
    records.iter().filter_map(ShiftRecord::to_break_record).collect()
}

/// Kind of break being recorded or authored. Actual breaks may overlap
/// existing ones; planned breaks may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BreakType {
    // Unrecognized break types are planned.
    Actual,
    #[default]
    #[serde(other)]
    Planned,
}

impl fmt::Display for BreakType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BreakType::Planned => write!(f, "planned"),
            BreakType::Actual => write!(f, "actual"),
        }
    }
}

/// Rendering hint: actual breaks draw filled, scheduled ones hatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakStatus {
    Actual,
    #[default]
    #[serde(other)]
    Scheduled,
}

/// One planned or actual break from the break list.
///
/// A break is tied to a person by `user_id` and to a shift row by
/// `shift_detail_id`; either may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BreakRecord {
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub shift_detail_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "nullable")]
    pub kind: BreakType,
    #[serde(default, deserialize_with = "nullable")]
    pub status: BreakStatus,
    #[serde(default, deserialize_with = "lenient_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Which fallback chain to walk when identifying a break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityBasis {
    /// `id` → `shift_detail_id` → span. Used to drop duplicate records.
    Record,
    /// `user_id` → `shift_detail_id` → `id` → span. Used to count people on break.
    Person,
}

/// Key produced by [`break_identity`]. Variants are tagged so equal numbers
/// from different fields never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BreakIdentity {
    User(i64),
    ShiftDetail(i64),
    Record(i64),
    Span(String, String),
}

impl fmt::Display for BreakIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BreakIdentity::User(id) => write!(f, "{}", id),
            BreakIdentity::ShiftDetail(id) => write!(f, "sd:{}", id),
            BreakIdentity::Record(id) => write!(f, "id:{}", id),
            BreakIdentity::Span(start, end) => write!(f, "{}-{}", start, end),
        }
    }
}

/// Resolves the identity of a break along the chain selected by `basis`.
///
/// Both deduplication and on-break counting go through here so the two
/// chains cannot drift apart.
pub fn break_identity(record: &BreakRecord, basis: IdentityBasis) -> BreakIdentity {
    let by_record = record.id.map(BreakIdentity::Record);
    let by_shift = record.shift_detail_id.map(BreakIdentity::ShiftDetail);

    let resolved = match basis {
        IdentityBasis::Record => by_record.or(by_shift),
        IdentityBasis::Person => record.user_id.map(BreakIdentity::User).or(by_shift).or(by_record),
    };

    resolved.unwrap_or_else(|| {
        BreakIdentity::Span(
            record.start_time.clone().unwrap_or_default(),
            record.end_time.clone().unwrap_or_default(),
        )
    })
}

/// Break-creation request emitted once a slot range has been chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRequest {
    pub shift_detail_id: i64,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub kind: BreakType,
}
