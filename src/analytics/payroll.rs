use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::calendar::DateRange;
use crate::model::{Payslip, PayslipStatus};
use crate::store::WorkerDirectory;
use crate::utils::text::{contains_normalized, normalize};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PER_PAGE: u32 = 10;
const MAX_PER_PAGE: u32 = 100;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PayslipSort {
    #[default]
    MonthDesc,
    MonthAsc,
    NetSalaryDesc,
    NetSalaryAsc,
    WorkerName,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayslipQuery {
    pub worker_id: Option<String>,
    /// Matched against worker name and id, ignoring case.
    pub search_text: Option<String>,
    /// Inclusive range over the payslip month.
    pub month_range: Option<DateRange>,
    pub status: Option<PayslipStatus>,
    #[serde(default)]
    pub sort: PayslipSort,
    /// 1-based page number.
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    /// Matches before paging.
    pub total: usize,
}

fn display_name<'a, D: WorkerDirectory + ?Sized>(directory: &'a D, slip: &'a Payslip) -> &'a str {
    directory
        .display_name(&slip.worker_id)
        .unwrap_or(&slip.worker_id)
}

/// Filters, sorts and pages payslips. Sorting is stable, so ties keep
/// their input order.
pub fn query_payslips<'a, D: WorkerDirectory + ?Sized>(
    payslips: &'a [Payslip],
    query: &PayslipQuery,
    directory: &D,
) -> Page<&'a Payslip> {
    let page = query.page.unwrap_or(DEFAULT_PAGE).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);

    let needle = query
        .search_text
        .as_deref()
        .map(normalize)
        .filter(|n| !n.is_empty());

    let mut matched: Vec<&Payslip> = payslips
        .iter()
        .filter(|slip| query.worker_id.as_deref().is_none_or(|id| slip.worker_id == id))
        .filter(|slip| query.status.is_none_or(|status| slip.status == status))
        .filter(|slip| query.month_range.is_none_or(|range| range.contains(slip.month)))
        .filter(|slip| {
            needle.as_deref().is_none_or(|needle| {
                contains_normalized(&slip.worker_id, needle)
                    || contains_normalized(display_name(directory, slip), needle)
            })
        })
        .collect();

    match query.sort {
        PayslipSort::MonthDesc => matched.sort_by(|a, b| b.month.cmp(&a.month)),
        PayslipSort::MonthAsc => matched.sort_by(|a, b| a.month.cmp(&b.month)),
        PayslipSort::NetSalaryDesc => matched.sort_by(|a, b| b.net_salary.total_cmp(&a.net_salary)),
        PayslipSort::NetSalaryAsc => matched.sort_by(|a, b| a.net_salary.total_cmp(&b.net_salary)),
        PayslipSort::WorkerName => matched.sort_by(|a, b| {
            let by_name = display_name(directory, a)
                .to_lowercase()
                .cmp(&display_name(directory, b).to_lowercase());
            match by_name {
                Ordering::Equal => b.month.cmp(&a.month),
                other => other,
            }
        }),
    }

    let total = matched.len();
    let offset = ((page - 1) as usize).saturating_mul(per_page as usize);
    let data = matched
        .into_iter()
        .skip(offset)
        .take(per_page as usize)
        .collect();

    Page {
        data,
        page,
        per_page,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Worker;
    use chrono::NaiveDate;

    fn month(raw: &str) -> NaiveDate {
        format!("{raw}-01").parse().unwrap()
    }

    fn slip(id: &str, worker: &str, m: &str, base: f64, status: PayslipStatus) -> Payslip {
        let bonus = 500.0;
        let deductions = 250.0;
        Payslip {
            id: id.to_string(),
            worker_id: worker.to_string(),
            month: month(m),
            base_salary: base,
            bonus,
            deductions,
            net_salary: base + bonus - deductions,
            status,
        }
    }

    fn roster() -> Vec<Worker> {
        vec![
            Worker::new("W001", "Abebe Kebede"),
            Worker::new("W002", "Tigist Haile"),
        ]
    }

    fn payslips() -> Vec<Payslip> {
        vec![
            slip("p1", "W001", "2025-03", 9000.0, PayslipStatus::Paid),
            slip("p2", "W002", "2025-03", 12000.0, PayslipStatus::Paid),
            slip("p3", "W001", "2025-04", 9000.0, PayslipStatus::Issued),
            slip("p4", "W002", "2025-04", 12500.0, PayslipStatus::Issued),
            slip("p5", "W001", "2025-05", 9500.0, PayslipStatus::Draft),
        ]
    }

    fn ids(page: &Page<&Payslip>) -> Vec<String> {
        page.data.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn defaults_sort_newest_month_first() {
        let slips = payslips();
        let page = query_payslips(&slips, &PayslipQuery::default(), roster().as_slice());

        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 10);
        assert_eq!(page.total, 5);
        assert_eq!(ids(&page), vec!["p5", "p3", "p4", "p1", "p2"]);
    }

    #[test]
    fn filters_by_search_status_and_month_range() {
        let slips = payslips();
        let query = PayslipQuery {
            search_text: Some("tigist".to_string()),
            month_range: Some(DateRange::new(month("2025-04"), month("2025-05"))),
            ..Default::default()
        };
        let page = query_payslips(&slips, &query, roster().as_slice());
        assert_eq!(ids(&page), vec!["p4"]);

        let query = PayslipQuery {
            status: Some(PayslipStatus::Paid),
            sort: PayslipSort::NetSalaryDesc,
            ..Default::default()
        };
        let page = query_payslips(&slips, &query, roster().as_slice());
        assert_eq!(ids(&page), vec!["p2", "p1"]);
    }

    #[test]
    fn pages_are_clamped_and_total_counts_all_matches() {
        let slips = payslips();
        let query = PayslipQuery {
            page: Some(2),
            per_page: Some(2),
            sort: PayslipSort::MonthAsc,
            ..Default::default()
        };
        let page = query_payslips(&slips, &query, roster().as_slice());
        assert_eq!(page.total, 5);
        assert_eq!(ids(&page), vec!["p3", "p4"]);

        let query = PayslipQuery {
            page: Some(0),
            per_page: Some(500),
            ..Default::default()
        };
        let page = query_payslips(&slips, &query, roster().as_slice());
        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 100);

        let query = PayslipQuery {
            page: Some(9),
            per_page: Some(0),
            ..Default::default()
        };
        let page = query_payslips(&slips, &query, roster().as_slice());
        assert_eq!(page.per_page, 1);
        assert!(page.data.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn worker_name_sort_breaks_ties_by_newest_month() {
        let slips = payslips();
        let query = PayslipQuery {
            sort: PayslipSort::WorkerName,
            worker_id: Some("W001".to_string()),
            ..Default::default()
        };
        let page = query_payslips(&slips, &query, roster().as_slice());
        assert_eq!(ids(&page), vec!["p5", "p3", "p1"]);

        let all = query_payslips(
            &slips,
            &PayslipQuery {
                sort: PayslipSort::WorkerName,
                ..Default::default()
            },
            roster().as_slice(),
        );
        assert_eq!(all.data.last().map(|p| p.worker_id.as_str()), Some("W002"));
    }

    #[test]
    fn net_recomputes_from_components() {
        let slip = slip("p1", "W001", "2025-03", 9000.0, PayslipStatus::Paid);
        assert_eq!(slip.net(), slip.net_salary);
    }
}
