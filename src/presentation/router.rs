// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    charts, dashboard_page, dataset, health_check, market_fragment, navigation, ranking_fragment,
    select_fiscal_year, select_tab,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/api/dataset", get(dataset))
        .route("/api/charts", get(charts))
        .route("/api/navigation", get(navigation))
        .route("/api/navigation/tab/:id", post(select_tab))
        .route("/api/navigation/fiscal-year/:value", post(select_fiscal_year))
        .route("/fragments/ranking", get(ranking_fragment))
        .route("/fragments/markets", get(market_fragment))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
