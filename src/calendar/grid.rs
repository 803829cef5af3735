use chrono::{NaiveDate, Weekday};

use super::period::month_grid;
use crate::analytics::index_by_date;
use crate::model::AttendanceRecord;

/// One cell of a month view. Blank padding cells have no date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDay<'a> {
    pub date: Option<NaiveDate>,
    pub record: Option<&'a AttendanceRecord>,
}

impl CalendarDay<'_> {
    pub fn is_blank(&self) -> bool {
        self.date.is_none()
    }
}

/// Lays one worker's records over the month containing `date`, as rows of
/// seven cells starting at `week_starts_on`.
pub fn calendar_month(
    records: &[AttendanceRecord],
    date: NaiveDate,
    week_starts_on: Weekday,
) -> Vec<Vec<CalendarDay<'_>>> {
    let index = index_by_date(records);

    let cells: Vec<CalendarDay<'_>> = month_grid(date, week_starts_on)
        .into_iter()
        .map(|day| CalendarDay {
            date: day,
            record: day.and_then(|d| index.get(&d).copied()),
        })
        .collect();

    cells.chunks(7).map(|row| row.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttendanceStatus;

    fn date(raw: &str) -> NaiveDate {
        raw.parse().unwrap()
    }

    #[test]
    fn places_records_on_their_days() {
        let records = vec![
            AttendanceRecord::new("a1", "W001", date("2025-05-01"), AttendanceStatus::Present),
            AttendanceRecord::new("a2", "W001", date("2025-05-02"), AttendanceStatus::Late),
            AttendanceRecord::new("a3", "W001", date("2025-04-30"), AttendanceStatus::Absent),
        ];

        let rows = calendar_month(&records, date("2025-05-14"), Weekday::Mon);
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 7));

        let first_row = &rows[0];
        assert!(first_row[..3].iter().all(CalendarDay::is_blank));
        assert_eq!(first_row[3].record.map(|r| r.id.as_str()), Some("a1"));
        assert_eq!(first_row[4].record.map(|r| r.id.as_str()), Some("a2"));
        assert_eq!(first_row[5].date, Some(date("2025-05-03")));
        assert!(first_row[5].record.is_none());

        let placed = rows.iter().flatten().filter(|c| c.record.is_some()).count();
        assert_eq!(placed, 2);
    }
}
