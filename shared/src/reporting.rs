//! Aggregation of reconciled rows into summary tables and chart series

use std::collections::BTreeMap;

use crate::models::{
    ChartPoint, CollectionStatus, DailyBucket, DepartmentSummary, FilterOptions, MonthlyBucket,
    PendingSerials, ReconciledEntry, SummaryReport,
};
use crate::types::ReportFilter;

/// Sort key for an optional date component; undated rows go last
type PeriodPart<T> = (bool, Option<T>);

fn part<T>(value: Option<T>) -> PeriodPart<T> {
    (value.is_none(), value)
}

/// Apply the department and date filters
pub fn filter_entries<'a>(
    entries: &'a [ReconciledEntry],
    filter: &ReportFilter,
) -> Vec<&'a ReconciledEntry> {
    entries.iter().filter(|e| filter.accepts(e)).collect()
}

/// Total, collected and pending counts per department, sorted by department
pub fn department_summary(entries: &[&ReconciledEntry]) -> Vec<DepartmentSummary> {
    let mut groups: BTreeMap<&str, DepartmentSummary> = BTreeMap::new();
    for entry in entries {
        let summary = groups
            .entry(entry.department.as_str())
            .or_insert_with(|| DepartmentSummary {
                department: entry.department.clone(),
                total: 0,
                collected: 0,
                pending: 0,
            });
        summary.total += 1;
        match entry.status {
            CollectionStatus::Collected => summary.collected += 1,
            CollectionStatus::Pending => summary.pending += 1,
        }
    }
    groups.into_values().collect()
}

/// Pending serials per department, keeping entry order within a department
pub fn pending_serials(entries: &[&ReconciledEntry]) -> Vec<PendingSerials> {
    let mut groups: BTreeMap<&str, Vec<i64>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.status == CollectionStatus::Pending) {
        groups
            .entry(entry.department.as_str())
            .or_default()
            .push(entry.serial_number);
    }
    groups
        .into_iter()
        .map(|(department, serial_numbers)| PendingSerials {
            department: department.to_string(),
            serial_numbers,
        })
        .collect()
}

/// Collected receipts per (year, month, department)
pub fn monthly_summary(entries: &[&ReconciledEntry]) -> Vec<MonthlyBucket> {
    let mut groups: BTreeMap<(PeriodPart<i32>, PeriodPart<u32>, &str), usize> = BTreeMap::new();
    for entry in entries {
        let collected = groups
            .entry((part(entry.year), part(entry.month), entry.department.as_str()))
            .or_insert(0);
        if entry.status.is_collected() {
            *collected += 1;
        }
    }
    groups
        .into_iter()
        .map(|(((_, year), (_, month), department), collected)| MonthlyBucket {
            year,
            month,
            department: department.to_string(),
            collected,
        })
        .collect()
}

/// Collected and pending receipts per (year, month, day, department)
pub fn daily_summary(entries: &[&ReconciledEntry]) -> Vec<DailyBucket> {
    type DayKey<'a> = (PeriodPart<i32>, PeriodPart<u32>, PeriodPart<u32>, &'a str);

    let mut groups: BTreeMap<DayKey<'_>, (usize, usize)> = BTreeMap::new();
    for entry in entries {
        let counts = groups
            .entry((
                part(entry.year),
                part(entry.month),
                part(entry.day),
                entry.department.as_str(),
            ))
            .or_insert((0, 0));
        match entry.status {
            CollectionStatus::Collected => counts.0 += 1,
            CollectionStatus::Pending => counts.1 += 1,
        }
    }
    groups
        .into_iter()
        .map(
            |(((_, year), (_, month), (_, day), department), (collected, pending))| DailyBucket {
                year,
                month,
                day,
                department: department.to_string(),
                collected,
                pending,
            },
        )
        .collect()
}

/// Chart series for the monthly summary; `None` when there is nothing to plot
pub fn monthly_chart(buckets: &[MonthlyBucket]) -> Option<Vec<ChartPoint>> {
    if buckets.is_empty() {
        return None;
    }
    Some(
        buckets
            .iter()
            .map(|b| ChartPoint {
                period: b.period_label(),
                department: b.department.clone(),
                receipt_count: b.collected,
            })
            .collect(),
    )
}

/// Build the summary view for the filtered entries
pub fn summarize(entries: &[ReconciledEntry], filter: &ReportFilter) -> SummaryReport {
    let filtered = filter_entries(entries, filter);
    let monthly = monthly_summary(&filtered);

    SummaryReport {
        departments: department_summary(&filtered),
        pending: pending_serials(&filtered),
        chart: monthly_chart(&monthly),
        monthly,
    }
}

/// Distinct departments in first-seen order and the issue date span
pub fn filter_options(entries: &[ReconciledEntry]) -> FilterOptions {
    let mut options = FilterOptions::default();
    for entry in entries {
        if !options.departments.contains(&entry.department) {
            options.departments.push(entry.department.clone());
        }
        if let Some(date) = entry.issued_date {
            options.earliest = Some(options.earliest.map_or(date, |d| d.min(date)));
            options.latest = Some(options.latest.map_or(date, |d| d.max(date)));
        }
    }
    options
}
