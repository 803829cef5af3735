pub mod attendance;
pub mod payroll;
pub mod shift;
pub mod worker;

pub use attendance::{AttendanceRecord, AttendanceStatus, Location};
pub use payroll::{Payslip, PayslipStatus};
pub use shift::{ShiftRecord, ShiftStatus, ShiftType};
pub use worker::Worker;
