//! Vehicle condition reports: scoring, pricing advice, and the intake wizard.

pub mod domain;
pub mod fixtures;
pub mod intake;
pub mod pricing;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnalysisReport, Annotation, Fine, IssueBreakdown, IssueCategory, LegalInfo, PriceEstimate,
    ReportId, Severity, VehicleDetails, VehicleImage,
};
pub use intake::{
    AnalysisState, AnalysisTracker, FieldError, ImageBatch, IntakeError, VehicleForm, WizardStep,
};
pub use pricing::{compare_price, format_axis_price, format_rupees, PriceBadge, PriceComparison};
pub use report::{IssueSummary, LegalSummary, ReportAssessment};
pub use repository::{MockReportRepository, ReportRepository, RepositoryError};
pub use router::vehicle_router;
pub use scoring::{
    classify_recommendation, classify_score_tier, compute_overall_score, Recommendation,
    ReportScorer, ScoreTier, ScoreTierPolicy, ScoringWeights,
};
pub use service::{AnalysisRequest, AnalysisServiceError, AnalysisTicket, VehicleAnalysisService};
