// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;

use crate::application::dashboard_service::DashboardService;
use crate::application::navigation_service::NavigationService;
use crate::domain::dataset::DashboardDataset;
use crate::domain::layout::{dashboard_tabs, tab_ids};
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::logging::init_tracing;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = load_dashboard_config()?;

    // A malformed dataset stops startup here
    let dashboard_service = DashboardService::new(DashboardDataset::fiscal_2021())
        .context("Failed to build dashboard payloads")?;

    let navigation_service = NavigationService::new(
        tab_ids(),
        &config.navigation.default_tab,
        config.navigation.fiscal_years.clone(),
        &config.navigation.default_fiscal_year,
    )?;

    let state = Arc::new(AppState {
        dashboard_service,
        navigation_service,
        page: config.page.clone(),
        tabs: dashboard_tabs(),
    });

    let router = build_router(state);

    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!(%addr, title = %config.page.title, "Starting bi-dashboard service");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
