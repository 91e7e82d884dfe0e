use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, Utc};
use serde_json::json;

use super::domain::ReportId;
use super::intake::{year_options, IntakeError, MAX_IMAGES, SUPPORTED_MAKES};
use super::repository::ReportRepository;
use super::service::{AnalysisRequest, AnalysisServiceError, VehicleAnalysisService};

pub fn vehicle_router<R>(service: Arc<VehicleAnalysisService<R>>) -> Router
where
    R: ReportRepository + 'static,
{
    Router::new()
        .route("/api/v1/vehicle/reports/:report_id", get(report_handler::<R>))
        .route("/api/v1/vehicle/analyses", post(submit_handler::<R>))
        .route("/api/v1/vehicle/form-options", get(form_options_handler))
        .with_state(service)
}

pub(crate) async fn report_handler<R>(
    State(service): State<Arc<VehicleAnalysisService<R>>>,
    Path(report_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.assessment(&ReportId(report_id)).await {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(AnalysisServiceError::NotFound(id)) => {
            let payload = json!({
                "error": "report not found",
                "report_id": id,
                "back_to": "/vehicle-analyzer",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<VehicleAnalysisService<R>>>,
    Json(request): Json<AnalysisRequest>,
) -> Response
where
    R: ReportRepository + 'static,
{
    match service.submit(request).await {
        Ok(ticket) => (StatusCode::ACCEPTED, Json(ticket)).into_response(),
        Err(AnalysisServiceError::Intake(error)) => unprocessable(error),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn form_options_handler() -> Response {
    let payload = json!({
        "makes": SUPPORTED_MAKES,
        "years": year_options(Utc::now().year()),
        "max_images": MAX_IMAGES,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

fn unprocessable(error: IntakeError) -> Response {
    let payload = json!({
        "error": error.to_string(),
        "fields": error.field_errors(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
}

fn internal_error(error: AnalysisServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
}
