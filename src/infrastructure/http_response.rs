// HTTP response utilities for HTML fragments and JSON errors
use crate::domain::error::DashboardError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use maud::Markup;
use serde_json::json;

/// Serve a rendered fragment or page as `text/html`
pub fn html_response(markup: Markup) -> Response {
    Html(markup.into_string()).into_response()
}

impl DashboardError {
    pub fn status(&self) -> StatusCode {
        match self {
            DashboardError::UnknownOption { .. } => StatusCode::NOT_FOUND,
            DashboardError::InvalidDefault { .. } | DashboardError::SeriesLength { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
