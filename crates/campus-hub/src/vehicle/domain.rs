use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Opaque identifier of a generated analysis report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub String);

impl From<&str> for ReportId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Seller-supplied description of the vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub make: String,
    pub model: String,
    pub year: String,
    pub mileage: String,
    pub number_plate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VehicleDetails {
    /// The seller's quote in rupees. Blank or non-numeric text counts as no quote.
    pub fn quoted_price(&self) -> Option<f64> {
        self.seller_price
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(|price| price as f64)
    }

    pub fn headline(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Marker placed on an image, positioned in percent of width/height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x: f32,
    pub y: f32,
    pub label: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fine {
    pub date: NaiveDate,
    pub amount: u64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalInfo {
    pub owner_name: String,
    pub registration_date: NaiveDate,
    pub insurance_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_expiry: Option<NaiveDate>,
    pub fines: Vec<Fine>,
    pub accident_history: bool,
    pub stolen_status: bool,
}

impl LegalInfo {
    pub fn total_fines(&self) -> u64 {
        self.fines.iter().map(|fine| fine.amount).sum()
    }
}

/// Market figures for comparable listings. `min <= dealer_avg, direct_sell_avg <= max`
/// is expected upstream and not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub min: u64,
    pub max: u64,
    pub dealer_avg: u64,
    pub direct_sell_avg: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Exterior,
    Interior,
    Mechanical,
    Legal,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 4] = [
        IssueCategory::Exterior,
        IssueCategory::Interior,
        IssueCategory::Mechanical,
        IssueCategory::Legal,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Exterior => "Exterior",
            Self::Interior => "Interior",
            Self::Mechanical => "Mechanical",
            Self::Legal => "Legal",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueBreakdown {
    #[serde(default)]
    pub exterior: Vec<String>,
    #[serde(default)]
    pub interior: Vec<String>,
    #[serde(default)]
    pub mechanical: Vec<String>,
    #[serde(default)]
    pub legal: Vec<String>,
}

impl IssueBreakdown {
    pub fn items(&self, category: IssueCategory) -> &[String] {
        match category {
            IssueCategory::Exterior => &self.exterior,
            IssueCategory::Interior => &self.interior,
            IssueCategory::Mechanical => &self.mechanical,
            IssueCategory::Legal => &self.legal,
        }
    }

    pub fn total(&self) -> usize {
        IssueCategory::ALL
            .iter()
            .map(|category| self.items(*category).len())
            .sum()
    }
}

/// Generated condition report. Immutable for the lifetime of a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: ReportId,
    pub created_at: DateTime<Utc>,
    pub vehicle_details: VehicleDetails,
    pub images: Vec<VehicleImage>,
    pub visual_score: u8,
    pub legal_score: u8,
    pub market_value: PriceEstimate,
    pub legal_info: LegalInfo,
    pub issues: IssueBreakdown,
    pub suggested_price: u64,
}

impl AnalysisReport {
    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.images.iter().flat_map(|image| image.annotations.iter())
    }

    pub fn annotation_count(&self, severity: Severity) -> usize {
        self.annotations()
            .filter(|annotation| annotation.severity == severity)
            .count()
    }
}
