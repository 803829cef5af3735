//! Month and week windows over the proleptic Gregorian calendar.
//!
//! Everything here is a pure function of its arguments; the week start is
//! always passed in explicitly so results never depend on the host locale.

use chrono::{Datelike, Days as DayCount, Duration, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Granularity {
    #[default]
    Month,
    Week,
}

/// Maps a weekday number (Sunday = 0, Monday = 1, ... Saturday = 6).
pub fn week_start_from_index(index: u32) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Days between the configured week start and `date` (0..=6).
pub fn days_since_week_start(date: NaiveDate, week_starts_on: Weekday) -> u32 {
    (date.weekday().num_days_from_sunday() + 7 - week_starts_on.num_days_from_sunday()) % 7
}

pub fn start_of_week(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    date - Duration::days(days_since_week_start(date, week_starts_on) as i64)
}

pub fn end_of_week(date: NaiveDate, week_starts_on: Weekday) -> NaiveDate {
    start_of_week(date, week_starts_on) + Duration::days(6)
}

/// Inclusive span of calendar days. Iterating it is lazy, and because the
/// range is `Copy` it can be walked again from the start at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    pub fn iter(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

/// Ascending iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|d| *d <= self.end)?;
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(d) if d <= self.end => (self.end - d).num_days() as usize + 1,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl std::iter::FusedIterator for Days {}

pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end)
}

/// A month or week window, anchored at its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    pub granularity: Granularity,
    pub start: NaiveDate,
    pub week_starts_on: Weekday,
}

impl Period {
    /// The period of the given granularity that contains `date`.
    pub fn containing(date: NaiveDate, granularity: Granularity, week_starts_on: Weekday) -> Self {
        let start = match granularity {
            Granularity::Month => start_of_month(date),
            Granularity::Week => start_of_week(date, week_starts_on),
        };
        Self {
            granularity,
            start,
            week_starts_on,
        }
    }

    pub fn end(&self) -> NaiveDate {
        match self.granularity {
            Granularity::Month => end_of_month(self.start),
            Granularity::Week => self.start + Duration::days(6),
        }
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end())
    }

    pub fn previous(&self) -> Self {
        let start = match self.granularity {
            Granularity::Month => start_of_month(self.start - Duration::days(1)),
            Granularity::Week => self.start - Duration::days(7),
        };
        Self { start, ..*self }
    }

    pub fn next(&self) -> Self {
        let start = match self.granularity {
            Granularity::Month => self.end() + Duration::days(1),
            Granularity::Week => self.start + Duration::days(7),
        };
        Self { start, ..*self }
    }
}

/// `date` moved back by one month or one week.
///
/// Months clamp to the last day of the shorter month, so
/// `next_period(previous_period(d))` returns `d` whenever `d.day() <= 28`.
/// Weeks are always exactly seven days. `None` past the calendar's range.
pub fn previous_period(date: NaiveDate, granularity: Granularity) -> Option<NaiveDate> {
    match granularity {
        Granularity::Month => date.checked_sub_months(Months::new(1)),
        Granularity::Week => date.checked_sub_days(DayCount::new(7)),
    }
}

/// `date` moved forward by one month or one week; see [`previous_period`].
pub fn next_period(date: NaiveDate, granularity: Granularity) -> Option<NaiveDate> {
    match granularity {
        Granularity::Month => date.checked_add_months(Months::new(1)),
        Granularity::Week => date.checked_add_days(DayCount::new(7)),
    }
}

/// Cells of a 7-column month view: leading and trailing blanks are `None`.
pub fn month_grid(date: NaiveDate, week_starts_on: Weekday) -> Vec<Option<NaiveDate>> {
    let first = start_of_month(date);
    let leading = days_since_week_start(first, week_starts_on) as usize;
    let month = days_in_range(first, end_of_month(date));

    let filled = leading + month.len();
    let trailing = (7 - filled % 7) % 7;

    let mut cells = Vec::with_capacity(filled + trailing);
    cells.extend(std::iter::repeat(None).take(leading));
    cells.extend(month.iter().map(Some));
    cells.extend(std::iter::repeat(None).take(trailing));
    cells
}
