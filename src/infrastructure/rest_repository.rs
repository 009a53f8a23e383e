// Row store repository over a PostgREST-style HTTP API
use crate::application::workspace_repository::WorkspaceRepository;
use crate::domain::workspace::{ChartRow, DatasetRow, FinancialRow, ReportRow};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct RestWorkspaceRepository {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl RestWorkspaceRepository {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    fn build_table_url(&self, table: &str, owner_id: &str) -> String {
        // The store filters rows by owner; row-level security on its side is
        // the authorization boundary.
        format!(
            "{}/rest/v1/{}?owner_id=eq.{}&select=*",
            self.base_url,
            table,
            urlencoding::encode(owner_id)
        )
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, table: &str, owner_id: &str) -> Result<Vec<T>> {
        let url = self.build_table_url(table, owner_id);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send {} query to row store", table))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Row store query for {} failed with status {}: {}", table, status, body);
        }

        response
            .json::<Vec<T>>()
            .await
            .with_context(|| format!("Failed to parse {} rows", table))
    }
}

#[async_trait]
impl WorkspaceRepository for RestWorkspaceRepository {
    async fn fetch_datasets(&self, owner_id: &str) -> Result<Vec<DatasetRow>> {
        self.fetch_rows("datasets", owner_id).await
    }

    async fn fetch_reports(&self, owner_id: &str) -> Result<Vec<ReportRow>> {
        self.fetch_rows("reports", owner_id).await
    }

    async fn fetch_charts(&self, owner_id: &str) -> Result<Vec<ChartRow>> {
        self.fetch_rows("charts", owner_id).await
    }

    async fn fetch_financial_records(&self, owner_id: &str) -> Result<Vec<FinancialRow>> {
        self.fetch_rows("financial_records", owner_id).await
    }
}
