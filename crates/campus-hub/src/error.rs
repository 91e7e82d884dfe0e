use crate::catalog::CatalogServiceError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::vehicle::AnalysisServiceError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogServiceError),
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisServiceError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Analysis(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            AppError::Analysis(AnalysisServiceError::Intake(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
