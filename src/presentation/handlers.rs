// HTTP request handlers
use crate::domain::chart::ChartSpec;
use crate::domain::error::DashboardError;
use crate::domain::navigation::{FilterAcknowledgement, NavigationSnapshot};
use crate::infrastructure::http_response::html_response;
use crate::presentation::app_state::AppState;
use crate::presentation::page::{market_grid, ranking_table, render_page, PageContext};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard page, always opened on the default tab and fiscal year
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Response {
    let navigation = state.navigation_service.initial_state();
    let dashboard = &state.dashboard_service;
    let dataset = dashboard.dataset();

    let ctx = PageContext {
        title: &state.page.title,
        chart_js_url: &state.page.chart_js_url,
        tabs: &state.tabs,
        navigation: &navigation,
        kpis: &dataset.executive,
        markets: &dataset.markets,
        rankings: dashboard.rankings(),
        charts_json: dashboard.charts_json(),
    };

    tracing::debug!(active_tab = navigation.tabs.active(), "Rendering dashboard page");
    html_response(render_page(&ctx))
}

pub async fn dataset(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.dashboard_service.dataset().clone())
}

pub async fn charts(State(state): State<Arc<AppState>>) -> Json<Vec<ChartSpec>> {
    Json(state.dashboard_service.charts().to_vec())
}

pub async fn ranking_fragment(State(state): State<Arc<AppState>>) -> Response {
    html_response(ranking_table(state.dashboard_service.rankings()))
}

pub async fn market_fragment(State(state): State<Arc<AppState>>) -> Response {
    html_response(market_grid(&state.dashboard_service.dataset().markets))
}

pub async fn navigation(State(state): State<Arc<AppState>>) -> Json<NavigationSnapshot> {
    Json(state.navigation_service.snapshot())
}

pub async fn select_tab(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<NavigationSnapshot>, DashboardError> {
    let snapshot = state.navigation_service.select_tab(&id)?;
    Ok(Json(snapshot))
}

/// Acknowledges the filter choice without touching any chart data
pub async fn select_fiscal_year(
    Path(value): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<FilterAcknowledgement>, DashboardError> {
    let ack = state.navigation_service.select_fiscal_year(&value)?;
    Ok(Json(ack))
}
