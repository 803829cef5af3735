use chrono::{NaiveDate, Weekday};

use rona_attendance::analytics::{
    AttendanceAggregator, AttendancePolicy, FilterCriteria, PayslipQuery, RecordFilter,
    StatusFilter, lookup_by_date, query_payslips,
};
use rona_attendance::calendar::{Granularity, Period, calendar_month, days_in_range};
use rona_attendance::model::{AttendanceRecord, AttendanceStatus, Worker};
use rona_attendance::report::DashboardReport;
use rona_attendance::schedule::ShiftRotation;
use rona_attendance::store::{AttendanceStore, Fixture, InMemoryStore, ShiftStore};

fn date(raw: &str) -> NaiveDate {
    raw.parse().unwrap()
}

fn demo_store() -> InMemoryStore {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/demo.json");
    InMemoryStore::load(path).unwrap()
}

#[test]
fn three_day_sample_matches_dashboard_figures() {
    let records = vec![
        AttendanceRecord::new("a1", "W001", date("2025-05-01"), AttendanceStatus::Present),
        AttendanceRecord::new("a2", "W001", date("2025-05-02"), AttendanceStatus::Late),
        AttendanceRecord::new("a3", "W001", date("2025-05-03"), AttendanceStatus::Absent),
    ];

    let stats = AttendanceAggregator::default().compute_statistics(&records);
    assert_eq!(stats.total_days, 3);
    assert_eq!(stats.present_days, 1);
    assert_eq!(stats.late_days, 1);
    assert_eq!(stats.absent_days, 1);
    assert_eq!(stats.early_departure_days, 0);
    assert_eq!(stats.attendance_rate, 67);

    assert!(lookup_by_date(&records, date("2025-05-04")).is_none());
}

#[test]
fn search_narrows_demo_data_to_one_worker() {
    let store = demo_store();
    let records = store.attendance_for_organization(None).unwrap();
    let criteria = FilterCriteria::default().with_search("abe");

    let rows = RecordFilter::new(&criteria, &store).apply(&records);
    assert_eq!(rows.len(), 22);
    assert!(rows.iter().all(|r| r.worker_id == "W001"));

    let stats = AttendanceAggregator::default().compute_statistics(rows);
    assert_eq!(stats.attendance_rate, 86);
}

#[test]
fn filtered_worker_view_uses_present_only_policy() {
    let store = demo_store();
    let may = Period::containing(date("2025-05-09"), Granularity::Month, Weekday::Mon);
    let records = store.attendance_for_worker("W002", Some(may.range())).unwrap();

    let criteria = FilterCriteria::default().with_status(StatusFilter::Only(AttendanceStatus::Late));
    let late = RecordFilter::new(&criteria, &store).apply(&records);
    assert_eq!(late.len(), 2);

    let stats = AttendanceAggregator::new(AttendancePolicy::PresentOnly).compute_statistics(&records);
    assert_eq!(stats.total_days, 22);
    assert_eq!(stats.attendance_rate, 91);

    let rows = calendar_month(&records, may.start, Weekday::Mon);
    let filled = rows.iter().flatten().filter(|c| c.record.is_some()).count();
    assert_eq!(filled, 22);
    assert_eq!(rows.iter().flatten().filter(|c| c.date.is_some()).count(), 31);
}

#[test]
fn demo_dashboard_for_may() {
    let store = demo_store();
    let period = Period::containing(date("2025-05-31"), Granularity::Month, Weekday::Mon);
    let report = DashboardReport::build(&store, period, AttendancePolicy::PresentOrLate).unwrap();

    assert_eq!(report.period_start, date("2025-05-01"));
    assert_eq!(report.organization.total_days, 88);
    assert_eq!(report.organization.attendance_rate, 93);
    assert_eq!(report.workers.len(), 4);
    assert_eq!(report.shifts.total, 30);
    assert_eq!(report.shifts.completion_rate, 93);

    let previous = DashboardReport::build(&store, period.previous(), AttendancePolicy::PresentOrLate).unwrap();
    assert_eq!(previous.organization.total_days, 0);
    assert_eq!(previous.organization.attendance_rate, 0);
}

#[test]
fn generated_rotation_loads_into_store() {
    let roster = vec![
        Worker::new("W001", "Abebe Kebede"),
        Worker::new("W002", "Tigist Haile"),
    ];
    let june = days_in_range(date("2025-06-01"), date("2025-06-30"));
    let shifts = ShiftRotation::default().generate(&roster, june);

    let fixture = Fixture {
        workers: roster,
        shifts,
        ..Default::default()
    };
    let store = InMemoryStore::from_fixture(fixture).unwrap();
    assert_eq!(store.shifts_for_worker("W002", Some(june)).unwrap().len(), 30);
}

#[test]
fn payslips_page_through_demo_data() {
    let store = demo_store();
    let query = PayslipQuery {
        search_text: Some("selam".to_string()),
        ..Default::default()
    };
    let page = query_payslips(store.payslips(), &query, &store);

    assert_eq!(page.total, 2);
    assert_eq!(page.data[0].month, date("2025-04-01"));
    assert!(page.data.iter().all(|p| (p.net() - p.net_salary).abs() < 0.01));
}
