use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::AnalysisConfig;
use crate::vehicle::domain::{AnalysisReport, ReportId};
use crate::vehicle::fixtures::demo_report;
use crate::vehicle::intake::VehicleForm;
use crate::vehicle::repository::{MockReportRepository, ReportRepository, RepositoryError};
use crate::vehicle::service::VehicleAnalysisService;

pub(super) fn seeded_service() -> Arc<VehicleAnalysisService<MockReportRepository>> {
    Arc::new(VehicleAnalysisService::new(
        Arc::new(MockReportRepository::seeded()),
        AnalysisConfig::immediate(),
    ))
}

pub(super) fn valid_form() -> VehicleForm {
    VehicleForm {
        make: "Hyundai".to_string(),
        model: "Creta".to_string(),
        year: "2021".to_string(),
        mileage: "32000".to_string(),
        number_plate: "KA01MN4321".to_string(),
        seller_price: Some(" 910000 ".to_string()),
        description: Some("   ".to_string()),
    }
}

/// Demo report with the seller quote replaced.
pub(super) fn report_quoting(seller_price: Option<&str>) -> AnalysisReport {
    let mut report = demo_report();
    report.vehicle_details.seller_price = seller_price.map(str::to_string);
    report
}

pub(super) struct OfflineRepository;

impl ReportRepository for OfflineRepository {
    fn fetch(&self, _id: &ReportId) -> Result<Option<AnalysisReport>, RepositoryError> {
        Err(RepositoryError::Unavailable("analysis backend offline".to_string()))
    }

    fn insert(&self, _report: AnalysisReport) -> Result<AnalysisReport, RepositoryError> {
        Err(RepositoryError::Unavailable("analysis backend offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json")
}
