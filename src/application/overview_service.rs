// Overview service - Use case for building the analytics overview snapshot
use crate::application::workspace_repository::WorkspaceRepository;
use crate::domain::overview::{
    CategoryCount, DatasetHealth, Financial, MonthlyPoint, OverviewAnalytics, QuarterPoint,
    StorageUsage, Summary,
};
use crate::domain::workspace::{ChartRow, DatasetRow, DatasetStatus, FinancialRow, ReportRow};
use crate::infrastructure::config::AnalyticsSettings;
use chrono::{DateTime, Datelike, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OverviewError {
    #[error("data access failed: {0}")]
    DataAccess(#[source] anyhow::Error),
}

#[derive(Clone)]
pub struct OverviewService {
    repository: Arc<dyn WorkspaceRepository>,
    settings: AnalyticsSettings,
}

impl OverviewService {
    pub fn new(repository: Arc<dyn WorkspaceRepository>, settings: AnalyticsSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }

    /// Fetch all owner-scoped rows and derive one immutable snapshot.
    /// The four fetches are independent, so they run concurrently; any
    /// failure fails the whole call (no partial snapshot).
    pub async fn get_overview(&self, owner_id: &str) -> Result<OverviewAnalytics, OverviewError> {
        let (datasets, reports, charts, financials) = futures::try_join!(
            self.repository.fetch_datasets(owner_id),
            self.repository.fetch_reports(owner_id),
            self.repository.fetch_charts(owner_id),
            self.repository.fetch_financial_records(owner_id),
        )
        .map_err(OverviewError::DataAccess)?;

        Ok(self.build_snapshot(&datasets, &reports, &charts, &financials, Utc::now()))
    }

    fn build_snapshot(
        &self,
        datasets: &[DatasetRow],
        reports: &[ReportRow],
        charts: &[ChartRow],
        financials: &[FinancialRow],
        now: DateTime<Utc>,
    ) -> OverviewAnalytics {
        let current_month = month_index(now.year(), now.month0());
        let monthly_series =
            monthly_series(financials, current_month, self.settings.trailing_months);
        let quarterly_series = quarterly_rollup(&monthly_series);

        let total_revenue: f64 = monthly_series.iter().map(|p| p.revenue).sum();
        let total_costs: f64 = monthly_series.iter().map(|p| p.costs).sum();

        let used_mb: f64 = datasets.iter().filter_map(|d| d.size_mb).sum();
        let skipped_rows = count_malformed(datasets, financials);
        if skipped_rows > 0 {
            tracing::warn!("skipped {} rows with missing fields", skipped_rows);
        }

        OverviewAnalytics {
            summary: Summary {
                total_datasets: datasets.len(),
                active_reports: reports.len(),
                created_charts: charts.len(),
                growth_percentage: growth_percentage(datasets, current_month),
            },
            financial: Financial {
                total_revenue,
                total_costs,
                net_profit: total_revenue - total_costs,
                monthly_series,
                quarterly_series,
            },
            category_distribution: category_distribution(datasets),
            dataset_health: dataset_health(datasets),
            storage: StorageUsage::new(used_mb, self.settings.storage_capacity_mb),
            skipped_rows,
            last_updated: now,
        }
    }
}

/// Absolute month count since year zero, used as a bucketing key.
fn month_index(year: i32, month0: u32) -> i32 {
    year * 12 + month0 as i32
}

fn month_label(index: i32) -> String {
    let year = index.div_euclid(12);
    let month = index.rem_euclid(12) + 1;
    format!("{:04}-{:02}", year, month)
}

/// Datasets created this calendar month against the previous one.
/// A zero prior-period baseline reports 0% rather than dividing by zero.
fn growth_percentage(datasets: &[DatasetRow], current_month: i32) -> f64 {
    let mut current = 0usize;
    let mut previous = 0usize;
    for row in datasets {
        let Some(created) = row.created_at else {
            continue;
        };
        let index = month_index(created.year(), created.month0());
        if index == current_month {
            current += 1;
        } else if index == current_month - 1 {
            previous += 1;
        }
    }

    if previous == 0 {
        return 0.0;
    }
    (current as f64 - previous as f64) / previous as f64 * 100.0
}

/// Group financial rows by calendar month and emit an ascending series over
/// the trailing window, filling empty months with zero revenue and costs.
/// Rows without a month are dropped; missing amounts contribute zero.
fn monthly_series(
    financials: &[FinancialRow],
    current_month: i32,
    trailing_months: u32,
) -> Vec<MonthlyPoint> {
    let mut by_month: HashMap<i32, (f64, f64)> = HashMap::new();
    for row in financials {
        let Some(month) = row.month else {
            continue;
        };
        let entry = by_month
            .entry(month_index(month.year(), month.month0()))
            .or_insert((0.0, 0.0));
        entry.0 += row.revenue.unwrap_or(0.0);
        entry.1 += row.costs.unwrap_or(0.0);
    }

    (0..trailing_months as i32)
        .rev()
        .map(|offset| {
            let index = current_month - offset;
            let (revenue, costs) = by_month.get(&index).copied().unwrap_or((0.0, 0.0));
            MonthlyPoint {
                month: month_label(index),
                revenue,
                costs,
            }
        })
        .collect()
}

/// Partition the monthly series into consecutive groups of three and sum
/// revenue per group, labels in chronological order.
fn quarterly_rollup(monthly: &[MonthlyPoint]) -> Vec<QuarterPoint> {
    monthly
        .chunks(3)
        .enumerate()
        .map(|(i, months)| QuarterPoint {
            label: format!("Q{}", i + 1),
            revenue: months.iter().map(|m| m.revenue).sum(),
        })
        .collect()
}

/// One entry per distinct category label, descending by count with an
/// alphabetical tie-break. Datasets without a category are bucketed under
/// "Uncategorized" so the counts always sum to the dataset total.
fn category_distribution(datasets: &[DatasetRow]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for row in datasets {
        let name = row.category.as_deref().unwrap_or("Uncategorized");
        *counts.entry(name).or_insert(0) += 1;
    }

    let mut distribution: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, count)| CategoryCount {
            name: name.to_string(),
            count,
        })
        .collect();
    distribution.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    distribution
}

/// Single pass over dataset rows. Missing and unknown statuses bucket into
/// `error` so the three counters sum to the dataset total.
fn dataset_health(datasets: &[DatasetRow]) -> DatasetHealth {
    let mut health = DatasetHealth::default();
    for row in datasets {
        match row.status {
            Some(DatasetStatus::Processed) => health.processed += 1,
            Some(DatasetStatus::Pending) => health.pending += 1,
            Some(DatasetStatus::Error) | Some(DatasetStatus::Unknown) | None => health.error += 1,
        }
    }
    health
}

/// Rows excluded from at least one aggregate because a field was missing,
/// surfaced on the snapshot for observability.
fn count_malformed(datasets: &[DatasetRow], financials: &[FinancialRow]) -> usize {
    let datasets_skipped = datasets
        .iter()
        .filter(|d| d.size_mb.is_none() || d.created_at.is_none())
        .count();
    let financials_skipped = financials
        .iter()
        .filter(|f| f.month.is_none() || f.revenue.is_none() || f.costs.is_none())
        .count();
    datasets_skipped + financials_skipped
}
