//! Attendance, shift and payroll computations for the Rona workforce product.
//!
//! Records come from an [`store::AttendanceStore`] (or [`store::ShiftStore`]),
//! are narrowed with [`analytics::RecordFilter`], and reduced by
//! [`analytics::AttendanceAggregator`]. The [`calendar`] module lays periods
//! out for month and week views.

pub mod analytics;
pub mod calendar;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod schedule;
pub mod store;
pub mod utils;

pub use error::{ScheduleError, StoreError};
