//! Upload and details steps of the analysis wizard.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::domain::VehicleDetails;

/// Upload cap for a single analysis.
pub const MAX_IMAGES: usize = 5;

/// Earliest model year accepted by the details form.
pub const MIN_MODEL_YEAR: i32 = 1950;

const ACCEPTED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

pub const SUPPORTED_MAKES: [&str; 14] = [
    "Toyota",
    "Honda",
    "Hyundai",
    "Maruti Suzuki",
    "Tata",
    "Mahindra",
    "Kia",
    "Ford",
    "Volkswagen",
    "Renault",
    "MG",
    "Skoda",
    "Nissan",
    "Jeep",
];

/// The last 25 model years, newest first.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (0..25).map(|offset| current_year - offset).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: &'static str,
}

impl UploadedImage {
    /// Accepts JPEG, PNG and WEBP files by extension.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let content_type = mime_guess::from_path(file_name).first_raw()?;
        ACCEPTED_CONTENT_TYPES
            .contains(&content_type)
            .then(|| Self {
                file_name: file_name.to_string(),
                content_type,
            })
    }
}

/// What happened to a batch of files offered to [`ImageBatch::add`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddOutcome {
    pub accepted: usize,
    /// Files with an unsupported type.
    pub rejected: Vec<String>,
    /// Supported files ignored because the batch was full.
    pub dropped: usize,
}

impl AddOutcome {
    pub fn notice(&self) -> Option<String> {
        (self.dropped > 0)
            .then(|| format!("Maximum {MAX_IMAGES} images allowed. Extra images were ignored."))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageBatch {
    images: Vec<UploadedImage>,
}

impl ImageBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<I, S>(&mut self, file_names: I) -> AddOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = AddOutcome::default();
        for name in file_names {
            let name = name.as_ref();
            let Some(image) = UploadedImage::from_file_name(name) else {
                outcome.rejected.push(name.to_string());
                continue;
            };
            if self.images.len() < MAX_IMAGES {
                self.images.push(image);
                outcome.accepted += 1;
            } else {
                outcome.dropped += 1;
            }
        }
        outcome
    }

    /// Out-of-range indexes are ignored.
    pub fn remove(&mut self, index: usize) -> Option<UploadedImage> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    pub fn images(&self) -> &[UploadedImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn remaining_slots(&self) -> usize {
        MAX_IMAGES - self.images.len()
    }

    /// The upload step may only advance with at least one image.
    pub fn ensure_ready(&self) -> Result<(), IntakeError> {
        if self.images.is_empty() {
            Err(IntakeError::NoImages)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Please upload at least one image")]
    NoImages,
    #[error("vehicle details are invalid ({} field(s))", .0.len())]
    InvalidFields(Vec<FieldError>),
}

impl IntakeError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::NoImages => &[],
            Self::InvalidFields(errors) => errors,
        }
    }
}

/// Raw details as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleForm {
    pub make: String,
    pub model: String,
    pub year: String,
    pub mileage: String,
    pub number_plate: String,
    pub seller_price: Option<String>,
    pub description: Option<String>,
}

impl VehicleForm {
    pub fn validate(&self) -> Result<VehicleDetails, IntakeError> {
        self.validate_at(Utc::now().year())
    }

    /// Checks every field and reports all failures together.
    pub fn validate_at(&self, current_year: i32) -> Result<VehicleDetails, IntakeError> {
        let mut errors = Vec::new();

        let make = self.make.trim();
        if make.chars().count() < 2 {
            errors.push(FieldError::new("make", "Make is required"));
        }

        let model = self.model.trim();
        if model.chars().count() < 2 {
            errors.push(FieldError::new("model", "Model is required"));
        }

        let year = self.year.trim();
        let year_in_range = year
            .parse::<i32>()
            .is_ok_and(|year| (MIN_MODEL_YEAR..=current_year).contains(&year));
        if !year_in_range {
            errors.push(FieldError::new(
                "year",
                format!("Year must be between {MIN_MODEL_YEAR} and {current_year}"),
            ));
        }

        let mileage = self.mileage.trim();
        if mileage.parse::<u64>().is_err() {
            errors.push(FieldError::new(
                "mileage",
                "Mileage must be a positive number",
            ));
        }

        let number_plate = self.number_plate.trim();
        if number_plate.is_empty() {
            errors.push(FieldError::new("number_plate", "Number plate is required"));
        }

        let seller_price = non_blank(self.seller_price.as_deref());
        if seller_price.is_some_and(|price| price.parse::<u64>().is_err()) {
            errors.push(FieldError::new(
                "seller_price",
                "Quoted price must be a whole number of rupees",
            ));
        }

        if !errors.is_empty() {
            return Err(IntakeError::InvalidFields(errors));
        }

        Ok(VehicleDetails {
            make: make.to_string(),
            model: model.to_string(),
            year: year.to_string(),
            mileage: mileage.to_string(),
            number_plate: number_plate.to_string(),
            seller_price: seller_price.map(str::to_string),
            description: non_blank(self.description.as_deref()).map(str::to_string),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Upload,
    Details,
    Analysis,
}

impl WizardStep {
    pub const fn index(self) -> u8 {
        match self {
            Self::Upload => 1,
            Self::Details => 2,
            Self::Analysis => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload Images",
            Self::Details => "Vehicle Details",
            Self::Analysis => "Analysis",
        }
    }

    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Upload => Some(Self::Details),
            Self::Details => Some(Self::Analysis),
            Self::Analysis => None,
        }
    }

    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Upload => None,
            Self::Details => Some(Self::Upload),
            Self::Analysis => Some(Self::Details),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AnalysisState {
    #[default]
    Idle,
    Pending,
    Success {
        report_id: String,
    },
    Failed {
        reason: String,
    },
}

/// Caller-side guard for the submit-and-wait step. A second submission while
/// one is in flight is ignored.
#[derive(Debug, Clone, Default)]
pub struct AnalysisTracker {
    state: AnalysisState,
}

impl AnalysisTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AnalysisState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == AnalysisState::Pending
    }

    /// Returns `false` when a submission is already pending.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        self.state = AnalysisState::Pending;
        true
    }

    pub fn succeed(&mut self, report_id: impl Into<String>) {
        if self.is_pending() {
            self.state = AnalysisState::Success {
                report_id: report_id.into(),
            };
        }
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        if self.is_pending() {
            self.state = AnalysisState::Failed {
                reason: reason.into(),
            };
        }
    }

    pub fn reset(&mut self) {
        self.state = AnalysisState::Idle;
    }
}
