//! Data source contracts and the in-memory reference store.

pub mod fixture;
pub mod memory;

use crate::calendar::DateRange;
use crate::error::StoreError;
use crate::model::{AttendanceRecord, ShiftRecord, Worker};

pub use fixture::Fixture;
pub use memory::InMemoryStore;

/// Supplies immutable attendance records. Implementations may sit in front
/// of a remote service; each call is one complete request.
pub trait AttendanceStore {
    fn attendance_for_worker(
        &self,
        worker_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<AttendanceRecord>, StoreError>;

    fn attendance_for_organization(
        &self,
        range: Option<DateRange>,
    ) -> Result<Vec<AttendanceRecord>, StoreError>;
}

pub trait ShiftStore {
    fn shifts_for_worker(
        &self,
        worker_id: &str,
        range: Option<DateRange>,
    ) -> Result<Vec<ShiftRecord>, StoreError>;

    fn shifts_for_organization(
        &self,
        range: Option<DateRange>,
    ) -> Result<Vec<ShiftRecord>, StoreError>;
}

/// Resolves worker ids to the names shown in search and tables.
pub trait WorkerDirectory {
    fn display_name(&self, worker_id: &str) -> Option<&str>;

    fn workers(&self) -> Vec<&Worker>;
}

impl WorkerDirectory for [Worker] {
    fn display_name(&self, worker_id: &str) -> Option<&str> {
        self.iter()
            .find(|w| w.id == worker_id)
            .map(|w| w.name.as_str())
    }

    fn workers(&self) -> Vec<&Worker> {
        self.iter().collect()
    }
}
