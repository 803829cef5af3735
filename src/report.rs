use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::analytics::{
    AttendanceAggregator, AttendancePolicy, DerivedStatistics, ShiftStatistics,
    compute_shift_statistics,
};
use crate::calendar::{Granularity, Period};
use crate::error::StoreError;
use crate::store::{AttendanceStore, ShiftStore, WorkerDirectory};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSummary {
    pub worker_id: String,
    pub name: String,
    pub statistics: DerivedStatistics,
}

/// Attendance and shift figures for one period, as shown on the admin
/// dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub granularity: Granularity,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub policy: AttendancePolicy,
    pub organization: DerivedStatistics,
    pub workers: Vec<WorkerSummary>,
    pub shifts: ShiftStatistics,
}

impl DashboardReport {
    /// Workers known to the directory appear even without records in the
    /// period; workers with records but no directory entry are listed by id.
    #[instrument(name = "dashboard_report", skip(store), fields(start = %period.start))]
    pub fn build<S>(
        store: &S,
        period: Period,
        policy: AttendancePolicy,
    ) -> Result<Self, StoreError>
    where
        S: AttendanceStore + ShiftStore + WorkerDirectory,
    {
        let range = period.range();
        let records = store.attendance_for_organization(Some(range))?;
        let shifts = store.shifts_for_organization(Some(range))?;
        debug!(records = records.len(), shifts = shifts.len(), "Period data fetched");

        let aggregator = AttendanceAggregator::new(policy);
        let organization = aggregator.compute_statistics(&records);
        let mut by_worker = aggregator.statistics_by_worker(&records);

        let mut workers: Vec<WorkerSummary> = store
            .workers()
            .into_iter()
            .map(|worker| WorkerSummary {
                worker_id: worker.id.clone(),
                name: worker.name.clone(),
                statistics: by_worker.remove(&worker.id).unwrap_or_default(),
            })
            .collect();

        workers.extend(by_worker.into_iter().map(|(worker_id, statistics)| WorkerSummary {
            name: worker_id.clone(),
            worker_id,
            statistics,
        }));
        workers.sort_by(|a, b| a.worker_id.cmp(&b.worker_id));

        Ok(Self {
            granularity: period.granularity,
            period_start: period.start,
            period_end: period.end(),
            policy,
            organization,
            workers,
            shifts: compute_shift_statistics(&shifts),
        })
    }
}
