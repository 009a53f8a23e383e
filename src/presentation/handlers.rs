// HTTP request handlers
use crate::application::overview_service::OverviewError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Build the overview analytics snapshot for one owner.
/// The owner identity is authenticated upstream; here it is only a scoping
/// filter passed through to the row store.
pub async fn get_overview(
    Path(owner_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.overview_service.get_overview(&owner_id).await {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(OverviewError::DataAccess(source)) => {
            tracing::error!("overview fetch for owner {} failed: {:#}", owner_id, source);
            error_response(StatusCode::BAD_GATEWAY, "upstream data access failed")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
