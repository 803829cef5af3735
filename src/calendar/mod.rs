pub mod grid;
pub mod period;

pub use grid::{CalendarDay, calendar_month};
pub use period::{
    DateRange, Days, Granularity, Period, days_in_range, end_of_month, end_of_week, month_grid,
    next_period, previous_period, start_of_month, start_of_week, week_start_from_index,
};
