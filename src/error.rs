use chrono::NaiveDate;
use derive_more::{Display, From};

/// Failures raised while loading or populating a record store.
#[derive(Debug, Display, From)]
pub enum StoreError {
    #[display(fmt = "failed to read fixture: {}", _0)]
    Io(std::io::Error),

    #[display(fmt = "failed to parse fixture: {}", _0)]
    Parse(serde_json::Error),

    #[display(fmt = "worker {} already has an attendance record on {}", worker_id, date)]
    #[from(ignore)]
    DuplicateAttendance { worker_id: String, date: NaiveDate },

    #[display(fmt = "worker {} already has a shift on {}", worker_id, date)]
    #[from(ignore)]
    DuplicateShift { worker_id: String, date: NaiveDate },
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

/// Rejected shift rotation settings.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum ScheduleError {
    #[display(fmt = "shift rotation pattern is empty")]
    EmptyPattern,

    #[display(fmt = "shift rotation block length must be at least one day")]
    ZeroBlockLength,
}

impl std::error::Error for ScheduleError {}
