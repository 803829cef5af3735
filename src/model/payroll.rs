use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PayslipStatus {
    Draft,
    Issued,
    Paid,
}

/// One worker's pay for one month. `month` is the first day of the pay month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payslip {
    pub id: String,
    pub worker_id: String,
    pub month: NaiveDate,
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub status: PayslipStatus,
}

impl Payslip {
    /// Net pay recomputed from its components.
    pub fn net(&self) -> f64 {
        self.base_salary + self.bonus - self.deductions
    }
}
