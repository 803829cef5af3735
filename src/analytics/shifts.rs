use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rounded_percentage;
use crate::model::{ShiftRecord, ShiftStatus, ShiftType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftStatistics {
    pub total: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub missed: usize,
    pub swapped: usize,
    pub morning: usize,
    pub afternoon: usize,
    pub night: usize,
    /// Completed share of the shifts that have an outcome (completed or missed).
    pub completion_rate: u32,
}

pub fn compute_shift_statistics<'a, I>(shifts: I) -> ShiftStatistics
where
    I: IntoIterator<Item = &'a ShiftRecord>,
{
    let mut stats = ShiftStatistics::default();

    for shift in shifts {
        stats.total += 1;
        match shift.status {
            ShiftStatus::Scheduled => stats.scheduled += 1,
            ShiftStatus::Completed => stats.completed += 1,
            ShiftStatus::Missed => stats.missed += 1,
            ShiftStatus::Swapped => stats.swapped += 1,
        }
        match shift.shift_type {
            ShiftType::Morning => stats.morning += 1,
            ShiftType::Afternoon => stats.afternoon += 1,
            ShiftType::Night => stats.night += 1,
        }
    }

    stats.completion_rate = rounded_percentage(stats.completed, stats.completed + stats.missed);
    stats
}

/// The shift dated `date`, if any. Callers pass one worker's shifts, where
/// a date appears at most once.
pub fn lookup_shift_by_date(shifts: &[ShiftRecord], date: NaiveDate) -> Option<&ShiftRecord> {
    let mut matches = shifts.iter().filter(|s| s.date == date);
    let found = matches.next();
    debug_assert!(matches.next().is_none(), "more than one shift dated {date}");
    found
}
