// Workspace row models as read from the managed row store
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Processing state of a dataset. The store delivers these as plain strings,
/// so anything unrecognized lands in `Unknown` instead of failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetStatus {
    Processed,
    Pending,
    Error,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetRow {
    pub id: String,
    pub owner_id: String,
    #[serde(default)]
    pub status: Option<DatasetStatus>,
    #[serde(default)]
    pub size_mb: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportRow {
    pub id: String,
    pub owner_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartRow {
    pub id: String,
    pub owner_id: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FinancialRow {
    pub id: String,
    pub owner_id: String,
    #[serde(default)]
    pub month: Option<NaiveDate>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub costs: Option<f64>,
}
