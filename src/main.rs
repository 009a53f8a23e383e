// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::application::overview_service::OverviewService;
use crate::infrastructure::config::load_service_config;
use crate::infrastructure::rest_repository::RestWorkspaceRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_overview, health_check};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_service_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(RestWorkspaceRepository::new(
        config.store.rest_url,
        config.store.api_key,
    ));

    // Create services (application layer)
    let overview_service = OverviewService::new(repository, config.analytics);

    // Create application state
    let state = Arc::new(AppState { overview_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/overview/:owner_id", get(get_overview))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting databoard-overview service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
