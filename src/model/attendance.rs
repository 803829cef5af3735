use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::utils::time_format;

/// Recorded presence status for one worker on one day.
///
/// Values outside the known taxonomy are kept verbatim in `Unrecognized`
/// so they survive a round trip and can be told apart from real statuses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttendanceStatus {
    #[strum(serialize = "present")]
    Present,
    #[strum(serialize = "late")]
    Late,
    #[strum(serialize = "absent")]
    Absent,
    #[strum(serialize = "early-departure")]
    EarlyDeparture,
    #[strum(default)]
    Unrecognized(String),
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::EarlyDeparture => "early-departure",
            AttendanceStatus::Unrecognized(raw) => raw,
        }
    }

    /// True for the four statuses the product knows about.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, AttendanceStatus::Unrecognized(_))
    }
}

impl From<String> for AttendanceStatus {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(status) => status,
            Err(_) => AttendanceStatus::Unrecognized(raw),
        }
    }
}

impl From<AttendanceStatus> for String {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub worker_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(
        default,
        with = "time_format::hhmm_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_in_time: Option<NaiveTime>,
    #[serde(
        default,
        with = "time_format::hhmm_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub check_out_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl AttendanceRecord {
    /// Builds a record without clock times or location.
    pub fn new(
        id: impl Into<String>,
        worker_id: impl Into<String>,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Self {
        Self {
            id: id.into(),
            worker_id: worker_id.into(),
            date,
            status,
            check_in_time: None,
            check_out_time: None,
            location: None,
        }
    }
}
