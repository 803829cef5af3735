pub mod aggregator;
pub mod filter;
pub mod payroll;
pub mod shifts;

pub use aggregator::{
    AttendanceAggregator, AttendancePolicy, DerivedStatistics, index_by_date, lookup_by_date,
};
pub use filter::{FilterCriteria, RecordFilter, StatusFilter};
pub use payroll::{Page, PayslipQuery, PayslipSort, query_payslips};
pub use shifts::{ShiftStatistics, compute_shift_statistics, lookup_shift_by_date};

/// `part / whole` as a whole-number percentage, rounding halves up.
/// An empty `whole` yields 0.
pub(crate) fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part * 100 + whole / 2) / whole) as u32
}

#[cfg(test)]
mod tests {
    use super::rounded_percentage;

    #[test]
    fn rounds_halves_up() {
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(1, 200), 1);
        assert_eq!(rounded_percentage(0, 5), 0);
        assert_eq!(rounded_percentage(5, 5), 100);
        assert_eq!(rounded_percentage(0, 0), 0);
    }
}
