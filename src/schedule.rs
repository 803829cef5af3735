//! Deterministic shift-calendar generation.

use crate::calendar::DateRange;
use crate::error::ScheduleError;
use crate::model::{ShiftRecord, ShiftStatus, ShiftType, Worker};

/// Rotates workers through `pattern`, moving to the next shift type every
/// `days_per_block` days. Workers are staggered by their roster position so
/// a three-person roster covers all three shift types on every day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRotation {
    pattern: Vec<ShiftType>,
    days_per_block: u32,
}

impl Default for ShiftRotation {
    fn default() -> Self {
        Self {
            pattern: vec![ShiftType::Morning, ShiftType::Afternoon, ShiftType::Night],
            days_per_block: 7,
        }
    }
}

impl ShiftRotation {
    pub fn new(pattern: Vec<ShiftType>, days_per_block: u32) -> Result<Self, ScheduleError> {
        if pattern.is_empty() {
            return Err(ScheduleError::EmptyPattern);
        }
        if days_per_block == 0 {
            return Err(ScheduleError::ZeroBlockLength);
        }
        Ok(Self {
            pattern,
            days_per_block,
        })
    }

    /// Shift type for roster position `worker_index` on day `day_offset`
    /// of the range.
    pub fn shift_type_for(&self, worker_index: usize, day_offset: usize) -> ShiftType {
        let block = day_offset / self.days_per_block as usize;
        self.pattern[(worker_index + block) % self.pattern.len()]
    }

    /// One scheduled shift per worker per day of `range`, ordered by date and
    /// then by roster position.
    pub fn generate(&self, workers: &[Worker], range: DateRange) -> Vec<ShiftRecord> {
        let mut shifts = Vec::with_capacity(range.len() * workers.len());

        for (day_offset, date) in range.iter().enumerate() {
            for (worker_index, worker) in workers.iter().enumerate() {
                let shift_type = self.shift_type_for(worker_index, day_offset);
                let (start_time, end_time) = shift_type.hours();
                shifts.push(ShiftRecord {
                    id: format!("shift-{}-{}", worker.id, date.format("%Y%m%d")),
                    worker_id: worker.id.clone(),
                    date,
                    shift_type,
                    start_time,
                    end_time,
                    status: ShiftStatus::Scheduled,
                });
            }
        }

        tracing::debug!(
            workers = workers.len(),
            days = range.len(),
            generated = shifts.len(),
            "Shift rotation generated"
        );
        shifts
    }
}
