use std::sync::Arc;

use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::config::AnalysisConfig;
use crate::vehicle::router::{report_handler, vehicle_router};
use crate::vehicle::service::VehicleAnalysisService;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn report_route_returns_assessment() {
    let router = vehicle_router(seeded_service());

    let response = router
        .oneshot(
            Request::get("/api/v1/vehicle/reports/demo-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["title"], "Honda City (2019)");
    assert_eq!(payload["scores"]["overall"]["score"], 82);
    assert_eq!(payload["recommendation"], "Highly Recommended");
    assert_eq!(payload["pricing"]["comparison"]["status"], "available");
    assert_eq!(payload["pricing"]["badge_label"], "Overpriced by ₹30,000");
    assert_eq!(payload["legal"]["total_fines"], 3_500);
}

#[tokio::test]
async fn unknown_report_points_back_to_the_analyzer() {
    let response = report_handler(State(seeded_service()), Path("nope".to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert_eq!(payload["report_id"], "nope");
    assert_eq!(payload["back_to"], "/vehicle-analyzer");
}

#[tokio::test]
async fn offline_backend_is_an_internal_error() {
    let service = Arc::new(VehicleAnalysisService::new(
        Arc::new(OfflineRepository),
        AnalysisConfig::immediate(),
    ));
    let response = report_handler(State(service), Path("demo-123".to_string())).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn valid_submission_is_accepted() {
    let router = vehicle_router(seeded_service());
    let body = json!({
        "image_names": ["front.jpg", "rear.png"],
        "vehicle": {
            "make": "Tata",
            "model": "Nexon",
            "year": "2022",
            "mileage": "12000",
            "number_plate": "DL3CAB0001"
        }
    });

    let response = router
        .oneshot(post_json("/api/v1/vehicle/analyses", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert!(payload["report_id"]
        .as_str()
        .expect("report id present")
        .starts_with("rpt-"));
    assert_eq!(payload["images_accepted"], 2);
}

#[tokio::test]
async fn invalid_submission_lists_field_errors() {
    let router = vehicle_router(seeded_service());
    let body = json!({
        "image_names": ["front.jpg"],
        "vehicle": { "make": "Tata", "model": "N", "year": "1900", "mileage": "12000" }
    });

    let response = router
        .oneshot(post_json("/api/v1/vehicle/analyses", body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let fields: Vec<&str> = payload["fields"]
        .as_array()
        .expect("field list")
        .iter()
        .filter_map(|entry| entry["field"].as_str())
        .collect();
    assert_eq!(fields, vec!["model", "year", "number_plate"]);
}

#[tokio::test]
async fn submission_without_images_is_unprocessable() {
    let router = vehicle_router(seeded_service());
    let response = router
        .oneshot(post_json(
            "/api/v1/vehicle/analyses",
            json!({ "vehicle": { "make": "Tata" } }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Please upload at least one image");
}

#[tokio::test]
async fn form_options_list_makes_and_years() {
    let router = vehicle_router(seeded_service());
    let response = router
        .oneshot(
            Request::get("/api/v1/vehicle/form-options")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    let payload = read_json_body(response).await;
    assert_eq!(payload["makes"].as_array().map(Vec::len), Some(14));
    assert_eq!(payload["years"].as_array().map(Vec::len), Some(25));
    assert_eq!(payload["max_images"], 5);
}
