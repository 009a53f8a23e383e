// Overview analytics snapshot - the single shape this service produces
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewAnalytics {
    pub summary: Summary,
    pub financial: Financial,
    pub category_distribution: Vec<CategoryCount>,
    pub dataset_health: DatasetHealth,
    pub storage: StorageUsage,
    pub skipped_rows: usize,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_datasets: usize,
    pub active_reports: usize,
    pub created_charts: usize,
    pub growth_percentage: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Financial {
    pub total_revenue: f64,
    pub total_costs: f64,
    pub net_profit: f64,
    pub monthly_series: Vec<MonthlyPoint>,
    pub quarterly_series: Vec<QuarterPoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPoint {
    pub month: String,
    pub revenue: f64,
    pub costs: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterPoint {
    pub label: String,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetHealth {
    pub processed: usize,
    pub pending: usize,
    pub error: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUsage {
    pub used_mb: f64,
    pub capacity_mb: f64,
    pub usage_percentage: f64,
}

impl StorageUsage {
    /// Usage percentage is clamped to [0, 100] even when used exceeds capacity.
    pub fn new(used_mb: f64, capacity_mb: f64) -> Self {
        let raw = if capacity_mb > 0.0 {
            used_mb / capacity_mb * 100.0
        } else {
            0.0
        };
        Self {
            used_mb,
            capacity_mb,
            usage_percentage: raw.clamp(0.0, 100.0),
        }
    }
}
