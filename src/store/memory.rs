use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::{AttendanceStore, Fixture, ShiftStore, WorkerDirectory};
use crate::calendar::DateRange;
use crate::error::StoreError;
use crate::model::{AttendanceRecord, Payslip, ShiftRecord, Worker};

/// Holds everything in owned vectors, in insertion order.
///
/// One attendance record and one shift per (worker, date) is enforced on
/// insert, so lookups downstream can rely on it.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    workers: BTreeMap<String, Worker>,
    attendance: Vec<AttendanceRecord>,
    attendance_keys: HashSet<(String, NaiveDate)>,
    shifts: Vec<ShiftRecord>,
    shift_keys: HashSet<(String, NaiveDate)>,
    payslips: Vec<Payslip>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: Fixture) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for worker in fixture.workers {
            store.insert_worker(worker);
        }
        for record in fixture.attendance {
            store.insert_attendance(record)?;
        }
        for shift in fixture.shifts {
            store.insert_shift(shift)?;
        }
        for payslip in fixture.payslips {
            store.insert_payslip(payslip);
        }

        debug!(
            workers = store.workers.len(),
            attendance = store.attendance.len(),
            shifts = store.shifts.len(),
            payslips = store.payslips.len(),
            "Store populated"
        );
        Ok(store)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let store = Self::from_fixture(Fixture::from_json_file(path)?)?;
        info!(path = %path.display(), "Fixture loaded");
        Ok(store)
    }

    /// Replaces any worker with the same id.
    pub fn insert_worker(&mut self, worker: Worker) {
        self.workers.insert(worker.id.clone(), worker);
    }

    pub fn insert_attendance(&mut self, record: AttendanceRecord) -> Result<(), StoreError> {
        let key = (record.worker_id.clone(), record.date);
        if !self.attendance_keys.insert(key) {
            return Err(StoreError::DuplicateAttendance {
                worker_id: record.worker_id,
                date: record.date,
            });
        }
        self.attendance.push(record);
        Ok(())
    }

    pub fn insert_shift(&mut self, shift: ShiftRecord) -> Result<(), StoreError> {
        let key = (shift.worker_id.clone(), shift.date);
        if !self.shift_keys.insert(key) {
            return Err(StoreError::DuplicateShift {
                worker_id: shift.worker_id,
                date: shift.date,
            });
        }
        self.shifts.push(shift);
        Ok(())
    }

    pub fn insert_payslip(&mut self, payslip: Payslip) {
        self.payslips.push(payslip);
    }

    pub fn payslips(&self) -> &[Payslip] {
        &self.payslips
    }
}

fn in_range(range: Option<DateRange>, date: NaiveDate) -> bool {
    range.is_none_or(|r| r.contains(date))
}

impl AttendanceStore for InMemoryStore {
    fn attendance_for_worker(
        &self,
        worker_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        Ok(self
            .attendance
            .iter()
            .filter(|r| r.worker_id == worker_id && in_range(range, r.date))
            .cloned()
            .collect())
    }

    fn attendance_for_organization(
        &self,
        range: Option<DateRange>,
    ) -> Result<Vec<AttendanceRecord>, StoreError> {
        Ok(self
            .attendance
            .iter()
            .filter(|r| in_range(range, r.date))
            .cloned()
            .collect())
    }
}

impl ShiftStore for InMemoryStore {
    fn shifts_for_worker(
        &self,
        worker_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<ShiftRecord>, StoreError> {
        Ok(self
            .shifts
            .iter()
            .filter(|s| s.worker_id == worker_id && in_range(range, s.date))
            .cloned()
            .collect())
    }

    fn shifts_for_organization(
        &self,
        range: Option<DateRange>,
    ) -> Result<Vec<ShiftRecord>, StoreError> {
        Ok(self
            .shifts
            .iter()
            .filter(|s| in_range(range, s.date))
            .cloned()
            .collect())
    }
}

impl WorkerDirectory for InMemoryStore {
    fn display_name(&self, worker_id: &str) -> Option<&str> {
        self.workers.get(worker_id).map(|w| w.name.as_str())
    }

    fn workers(&self) -> Vec<&Worker> {
        self.workers.values().collect()
    }
}
