use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::model::{AttendanceRecord, Payslip, ShiftRecord, Worker};

/// On-disk seed data. Every section is optional.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Fixture {
    pub workers: Vec<Worker>,
    pub attendance: Vec<AttendanceRecord>,
    pub shifts: Vec<ShiftRecord>,
    pub payslips: Vec<Payslip>,
}

impl Fixture {
    pub fn from_json_str(raw: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
