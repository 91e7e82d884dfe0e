//! Canned condition report served by the mock analysis backend.

use chrono::{NaiveDate, Utc};

use super::domain::{
    AnalysisReport, Annotation, Fine, IssueBreakdown, LegalInfo, PriceEstimate, ReportId,
    Severity, VehicleDetails, VehicleImage,
};

pub const DEMO_REPORT_ID: &str = "demo-123";

fn on(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn image(id: &str, photo: &str, annotations: Vec<Annotation>) -> VehicleImage {
    VehicleImage {
        id: id.to_string(),
        url: format!("https://images.unsplash.com/{photo}?q=80&w=1024"),
        annotations,
    }
}

fn mark(x: f32, y: f32, label: &str, severity: Severity) -> Annotation {
    Annotation {
        x,
        y,
        label: label.to_string(),
        severity,
    }
}

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn demo_vehicle() -> VehicleDetails {
    VehicleDetails {
        make: "Honda".to_string(),
        model: "City".to_string(),
        year: "2019".to_string(),
        mileage: "45000".to_string(),
        number_plate: "MH02AB1234".to_string(),
        seller_price: Some("650000".to_string()),
        description: Some("Single owner vehicle with all service records.".to_string()),
    }
}

/// The 2019 Honda City walkthrough report.
pub fn demo_report() -> AnalysisReport {
    AnalysisReport {
        id: ReportId::from(DEMO_REPORT_ID),
        created_at: Utc::now(),
        vehicle_details: demo_vehicle(),
        images: vec![
            image(
                "img1",
                "photo-1580273916550-e323be2ae537",
                vec![
                    mark(25.0, 35.0, "Minor scratch on front bumper", Severity::Low),
                    mark(80.0, 45.0, "Small dent on right fender", Severity::Medium),
                ],
            ),
            image(
                "img2",
                "photo-1540066019607-e5f69323a8dc",
                vec![mark(
                    65.0,
                    55.0,
                    "Headlight foggy and needs cleaning",
                    Severity::Low,
                )],
            ),
            image("img3", "photo-1552642986-ccb41e7059e7", Vec::new()),
            image(
                "img4",
                "photo-1503376780353-7e6692767b70",
                vec![mark(
                    45.0,
                    60.0,
                    "Dashboard warning light visible",
                    Severity::High,
                )],
            ),
            image("img5", "photo-1492144534655-ae79c964c9d7", Vec::new()),
        ],
        visual_score: 78,
        legal_score: 85,
        market_value: PriceEstimate {
            min: 580_000,
            max: 720_000,
            dealer_avg: 680_000,
            direct_sell_avg: 600_000,
        },
        legal_info: LegalInfo {
            owner_name: "Rahul Sharma".to_string(),
            registration_date: on(2019, 5, 15),
            insurance_valid: true,
            insurance_expiry: Some(on(2024, 9, 23)),
            fines: vec![
                Fine {
                    date: on(2023, 3, 12),
                    amount: 2_000,
                    reason: "Parking violation".to_string(),
                },
                Fine {
                    date: on(2022, 8, 5),
                    amount: 1_500,
                    reason: "Speeding (15 km/h over limit)".to_string(),
                },
            ],
            accident_history: false,
            stolen_status: false,
        },
        issues: IssueBreakdown {
            exterior: lines(&[
                "Minor scratch on front bumper",
                "Small dent on right fender",
                "Headlight foggy and needs cleaning",
                "Slight paint fading on roof",
            ]),
            interior: lines(&[
                "Minor wear on driver seat",
                "Small tear on rear seat upholstery",
            ]),
            mechanical: lines(&[
                "Dashboard warning light visible - check engine",
                "Brake pads need replacement soon",
            ]),
            legal: Vec::new(),
        },
        suggested_price: 620_000,
    }
}
