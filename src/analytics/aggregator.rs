use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::rounded_percentage;
use crate::model::{AttendanceRecord, AttendanceStatus};

/// Which statuses count towards the attendance rate.
///
/// The admin attendance page treats a late arrival as attended; the worker
/// "on-time" view does not.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AttendancePolicy {
    #[default]
    PresentOrLate,
    PresentOnly,
}

impl AttendancePolicy {
    pub fn from_late_counts_as_attended(late_counts: bool) -> Self {
        if late_counts {
            AttendancePolicy::PresentOrLate
        } else {
            AttendancePolicy::PresentOnly
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStatistics {
    pub total_days: usize,
    pub present_days: usize,
    pub late_days: usize,
    pub absent_days: usize,
    pub early_departure_days: usize,
    pub attendance_rate: u32,
}

impl DerivedStatistics {
    /// Days that carried one of the four known statuses.
    pub fn classified_days(&self) -> usize {
        self.present_days + self.late_days + self.absent_days + self.early_departure_days
    }
}

/// Reduces attendance records into [`DerivedStatistics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AttendanceAggregator {
    policy: AttendancePolicy,
}

impl AttendanceAggregator {
    pub fn new(policy: AttendancePolicy) -> Self {
        Self { policy }
    }

    /// Every record counts towards `total_days`; records with an
    /// unrecognized status are left out of the four status counts.
    pub fn compute_statistics<'a, I>(&self, records: I) -> DerivedStatistics
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut stats = DerivedStatistics::default();

        for record in records {
            stats.total_days += 1;
            match record.status {
                AttendanceStatus::Present => stats.present_days += 1,
                AttendanceStatus::Late => stats.late_days += 1,
                AttendanceStatus::Absent => stats.absent_days += 1,
                AttendanceStatus::EarlyDeparture => stats.early_departure_days += 1,
                AttendanceStatus::Unrecognized(_) => {}
            }
        }

        let attended = match self.policy {
            AttendancePolicy::PresentOrLate => stats.present_days + stats.late_days,
            AttendancePolicy::PresentOnly => stats.present_days,
        };
        stats.attendance_rate = rounded_percentage(attended, stats.total_days);
        stats
    }

    /// Statistics per worker id, ordered by id.
    pub fn statistics_by_worker<'a, I>(&self, records: I) -> BTreeMap<String, DerivedStatistics>
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut grouped: BTreeMap<&str, Vec<&AttendanceRecord>> = BTreeMap::new();
        for record in records {
            grouped.entry(record.worker_id.as_str()).or_default().push(record);
        }

        grouped
            .into_iter()
            .map(|(worker_id, rows)| (worker_id.to_string(), self.compute_statistics(rows)))
            .collect()
    }
}

/// The record dated `date`, if any. Callers pass one worker's records, where
/// a date appears at most once.
pub fn lookup_by_date(records: &[AttendanceRecord], date: NaiveDate) -> Option<&AttendanceRecord> {
    let mut matches = records.iter().filter(|r| r.date == date);
    let found = matches.next();
    debug_assert!(
        matches.next().is_none(),
        "more than one attendance record dated {date}"
    );
    found
}

/// Date-keyed view of one worker's records for calendar rendering.
pub fn index_by_date(records: &[AttendanceRecord]) -> BTreeMap<NaiveDate, &AttendanceRecord> {
    let mut index = BTreeMap::new();
    for record in records {
        let previous = index.insert(record.date, record);
        debug_assert!(
            previous.is_none(),
            "more than one attendance record dated {}",
            record.date
        );
    }
    index
}
