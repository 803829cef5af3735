use std::convert::Infallible;
use std::str::FromStr;

use crate::calendar::DateRange;
use crate::model::{AttendanceRecord, AttendanceStatus};
use crate::store::WorkerDirectory;
use crate::utils::text::{contains_normalized, normalize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(AttendanceStatus),
}

impl FromStr for StatusFilter {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            Ok(StatusFilter::Only(AttendanceStatus::from(raw.to_lowercase())))
        }
    }
}

/// Caller-supplied predicate; every populated field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub status: Option<StatusFilter>,
    pub search_text: Option<String>,
    pub date_range: Option<DateRange>,
}

impl FilterCriteria {
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }
}

/// Selects attendance records matching a [`FilterCriteria`].
///
/// Search text is compared against the worker's display name, looked up in
/// the directory, and against the worker id. Output keeps input order.
pub struct RecordFilter<'a, D: WorkerDirectory + ?Sized> {
    criteria: &'a FilterCriteria,
    directory: &'a D,
    needle: Option<String>,
}

impl<'a, D: WorkerDirectory + ?Sized> RecordFilter<'a, D> {
    pub fn new(criteria: &'a FilterCriteria, directory: &'a D) -> Self {
        let needle = criteria
            .search_text
            .as_deref()
            .map(normalize)
            .filter(|n| !n.is_empty());
        Self {
            criteria,
            directory,
            needle,
        }
    }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        if let Some(StatusFilter::Only(status)) = &self.criteria.status {
            if &record.status != status {
                return false;
            }
        }

        if let Some(range) = &self.criteria.date_range {
            if !range.contains(record.date) {
                return false;
            }
        }

        match &self.needle {
            None => true,
            Some(needle) => {
                contains_normalized(&record.worker_id, needle)
                    || self
                        .directory
                        .display_name(&record.worker_id)
                        .is_some_and(|name| contains_normalized(name, needle))
            }
        }
    }

    pub fn apply<'r>(&self, records: &'r [AttendanceRecord]) -> Vec<&'r AttendanceRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn apply_owned(&self, records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}
