use super::common::valid_form;
use crate::vehicle::intake::{
    year_options, AnalysisState, AnalysisTracker, ImageBatch, IntakeError, WizardStep, MAX_IMAGES,
};

#[test]
fn batch_caps_uploads_and_reports_dropped_files() {
    let mut batch = ImageBatch::new();
    let first = batch.add(["front.jpg", "rear.jpeg", "interior.png"]);
    assert_eq!(first.accepted, 3);
    assert_eq!(first.notice(), None);

    let second = batch.add(["engine.webp", "dash.png", "boot.jpg", "roof.jpg"]);
    assert_eq!(second.accepted, 2);
    assert_eq!(second.dropped, 2);
    assert_eq!(
        second.notice().as_deref(),
        Some("Maximum 5 images allowed. Extra images were ignored.")
    );
    assert_eq!(batch.len(), MAX_IMAGES);
    assert_eq!(batch.remaining_slots(), 0);
}

#[test]
fn batch_rejects_unsupported_types() {
    let mut batch = ImageBatch::new();
    let outcome = batch.add(["service-history.pdf", "clip.mp4", "side.png"]);

    assert_eq!(outcome.accepted, 1);
    assert_eq!(outcome.rejected, vec!["service-history.pdf", "clip.mp4"]);
    assert_eq!(batch.images()[0].content_type, "image/png");
}

#[test]
fn batch_remove_and_clear() {
    let mut batch = ImageBatch::new();
    batch.add(["a.jpg", "b.jpg", "c.jpg"]);

    let removed = batch.remove(1).expect("index in range");
    assert_eq!(removed.file_name, "b.jpg");
    assert!(batch.remove(7).is_none());
    assert_eq!(batch.len(), 2);

    batch.clear();
    assert!(batch.is_empty());
    assert_eq!(batch.ensure_ready(), Err(IntakeError::NoImages));
}

#[test]
fn valid_form_produces_vehicle_details() {
    let details = valid_form().validate_at(2024).expect("form is valid");

    assert_eq!(details.make, "Hyundai");
    assert_eq!(details.seller_price.as_deref(), Some("910000"));
    assert_eq!(details.description, None);
    assert_eq!(details.quoted_price(), Some(910_000.0));
}

#[test]
fn invalid_form_lists_every_failing_field() {
    let mut form = valid_form();
    form.make = "H".to_string();
    form.year = "2031".to_string();
    form.mileage = "-20".to_string();
    form.number_plate = "  ".to_string();

    let error = form.validate_at(2024).expect_err("form is invalid");
    let fields: Vec<&str> = error.field_errors().iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["make", "year", "mileage", "number_plate"]);
    assert_eq!(
        error.field_errors()[1].message,
        "Year must be between 1950 and 2024"
    );
    assert_eq!(error.field_errors()[2].message, "Mileage must be a positive number");
}

#[test]
fn year_bounds_are_inclusive() {
    let mut form = valid_form();
    form.year = "1950".to_string();
    assert!(form.validate_at(2024).is_ok());

    form.year = "1949".to_string();
    assert!(form.validate_at(2024).is_err());

    form.year = "2024".to_string();
    assert!(form.validate_at(2024).is_ok());
}

#[test]
fn quoted_price_must_be_numeric_when_present() {
    let mut form = valid_form();
    form.seller_price = Some("about 9 lakh".to_string());
    let error = form.validate_at(2024).expect_err("price rejected");
    assert_eq!(error.field_errors()[0].field, "seller_price");

    form.seller_price = Some(String::new());
    let details = form.validate_at(2024).expect("blank price is optional");
    assert_eq!(details.seller_price, None);
}

#[test]
fn year_options_cover_last_twenty_five_years() {
    let years = year_options(2024);
    assert_eq!(years.len(), 25);
    assert_eq!(years.first(), Some(&2024));
    assert_eq!(years.last(), Some(&2000));
}

#[test]
fn wizard_steps_are_ordered() {
    assert!(WizardStep::Upload < WizardStep::Details);
    assert_eq!(WizardStep::Details.index(), 2);
    assert_eq!(WizardStep::Upload.next(), Some(WizardStep::Details));
    assert_eq!(WizardStep::Analysis.next(), None);
    assert_eq!(WizardStep::Details.previous(), Some(WizardStep::Upload));
}

#[test]
fn tracker_ignores_submission_while_pending() {
    let mut tracker = AnalysisTracker::new();
    assert!(tracker.begin());
    assert!(!tracker.begin());

    tracker.succeed("rpt-000001");
    assert_eq!(
        tracker.state(),
        &AnalysisState::Success {
            report_id: "rpt-000001".to_string()
        }
    );
    assert!(tracker.begin());
}

#[test]
fn tracker_only_settles_pending_submissions() {
    let mut tracker = AnalysisTracker::new();
    tracker.fail("network down");
    assert_eq!(tracker.state(), &AnalysisState::Idle);

    tracker.begin();
    tracker.fail("network down");
    assert!(matches!(tracker.state(), AnalysisState::Failed { .. }));

    tracker.reset();
    assert_eq!(tracker.state(), &AnalysisState::Idle);
}
