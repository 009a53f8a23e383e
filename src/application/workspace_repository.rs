// Repository trait for owner-scoped workspace row access
use crate::domain::workspace::{ChartRow, DatasetRow, FinancialRow, ReportRow};
use async_trait::async_trait;

/// Row fetches against the managed store, filtered by owner identity.
/// The store enforces row-level access; this trait trusts its filtering.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    async fn fetch_datasets(&self, owner_id: &str) -> anyhow::Result<Vec<DatasetRow>>;

    async fn fetch_reports(&self, owner_id: &str) -> anyhow::Result<Vec<ReportRow>>;

    async fn fetch_charts(&self, owner_id: &str) -> anyhow::Result<Vec<ChartRow>>;

    async fn fetch_financial_records(&self, owner_id: &str) -> anyhow::Result<Vec<FinancialRow>>;
}
