use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::utils::time_format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShiftType {
    Morning,
    Afternoon,
    Night,
}

impl ShiftType {
    /// Standard factory hours for each shift type.
    pub fn hours(&self) -> (NaiveTime, NaiveTime) {
        let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN);
        match self {
            ShiftType::Morning => (at(6), at(14)),
            ShiftType::Afternoon => (at(14), at(22)),
            ShiftType::Night => (at(22), at(6)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShiftStatus {
    Scheduled,
    Completed,
    Missed,
    Swapped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub id: String,
    pub worker_id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    #[serde(with = "time_format::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "time_format::hhmm")]
    pub end_time: NaiveTime,
    pub status: ShiftStatus,
}
