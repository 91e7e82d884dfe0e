use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::domain::{
    AnalysisReport, Fine, IssueCategory, PriceEstimate, ReportId, Severity, VehicleDetails,
    VehicleImage,
};
use super::pricing::{
    compare_price, price_chart_series, PriceBadge, PriceComparison, PricePoint,
};
use super::scoring::{ReportScorer, ScoreBreakdown, ScoreTier, ScoreTierPolicy};

pub const STOLEN_VEHICLE_ALERT: &str = "This vehicle has been reported as stolen. Do not proceed with the purchase, and consider reporting to local authorities.";

/// Registration, insurance, and fine history with the compliance narrative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegalSummary {
    pub owner_name: String,
    pub registration_date: NaiveDate,
    pub insurance_valid: bool,
    /// Shown only while the policy is valid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_expiry: Option<NaiveDate>,
    pub accident_history: bool,
    pub stolen_status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stolen_alert: Option<&'static str>,
    pub fines: Vec<Fine>,
    pub fine_count: usize,
    pub total_fines: u64,
    pub score: i32,
    pub tier: ScoreTier,
    pub narrative: &'static str,
}

impl LegalSummary {
    pub fn from_report(report: &AnalysisReport, policy: &ScoreTierPolicy) -> Self {
        let legal = &report.legal_info;
        let score = i32::from(report.legal_score);
        let tier = policy.tier(f64::from(score));

        Self {
            owner_name: legal.owner_name.clone(),
            registration_date: legal.registration_date,
            insurance_valid: legal.insurance_valid,
            insurance_expiry: legal.insurance_expiry.filter(|_| legal.insurance_valid),
            accident_history: legal.accident_history,
            stolen_status: legal.stolen_status,
            stolen_alert: legal.stolen_status.then_some(STOLEN_VEHICLE_ALERT),
            fines: legal.fines.clone(),
            fine_count: legal.fines.len(),
            total_fines: legal.total_fines(),
            score,
            tier,
            narrative: tier.legal_narrative(),
        }
    }

    pub fn has_clean_record(&self) -> bool {
        self.fines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueCategoryView {
    pub category: IssueCategory,
    pub label: &'static str,
    pub count: usize,
    pub items: Vec<String>,
}

impl IssueCategoryView {
    pub fn is_clean(&self) -> bool {
        self.count == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    pub total: usize,
    pub categories: Vec<IssueCategoryView>,
}

impl IssueSummary {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let categories = IssueCategory::ALL
            .iter()
            .map(|category| {
                let items = report.issues.items(*category).to_vec();
                IssueCategoryView {
                    category: *category,
                    label: category.label(),
                    count: items.len(),
                    items,
                }
            })
            .collect();

        Self {
            total: report.issues.total(),
            categories,
        }
    }

    pub fn category(&self, category: IssueCategory) -> Option<&IssueCategoryView> {
        self.categories.iter().find(|view| view.category == category)
    }
}

/// Annotated photos plus a tally of markers by severity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageSummary {
    pub images: Vec<VehicleImage>,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ImageSummary {
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            images: report.images.clone(),
            high: report.annotation_count(Severity::High),
            medium: report.annotation_count(Severity::Medium),
            low: report.annotation_count(Severity::Low),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingView {
    pub suggested_price: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_price: Option<f64>,
    pub market: PriceEstimate,
    pub comparison: PriceComparison,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<PriceBadge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_label: Option<String>,
    pub bargaining_tip: String,
    pub chart: Vec<PricePoint>,
}

impl PricingView {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let suggested = report.suggested_price as f64;
        let quoted = report.vehicle_details.quoted_price();
        let comparison = compare_price(suggested, quoted);
        let badge = comparison.badge();

        Self {
            suggested_price: report.suggested_price,
            quoted_price: quoted,
            market: report.market_value,
            comparison,
            badge,
            badge_label: badge.map(|badge| badge.label()),
            bargaining_tip: comparison.bargaining_tip(),
            chart: price_chart_series(&report.market_value, suggested, quoted),
        }
    }
}

/// Everything the report page renders, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportAssessment {
    pub report_id: ReportId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub vehicle: VehicleDetails,
    pub scores: ScoreBreakdown,
    pub recommendation: &'static str,
    pub pricing: PricingView,
    pub legal: LegalSummary,
    pub issues: IssueSummary,
    pub images: ImageSummary,
}

impl ReportAssessment {
    pub fn build(report: &AnalysisReport, scorer: &ReportScorer) -> Self {
        let scores = scorer.score(report);

        Self {
            report_id: report.id.clone(),
            title: report.vehicle_details.headline(),
            created_at: report.created_at,
            vehicle: report.vehicle_details.clone(),
            recommendation: scores.recommendation.label(),
            scores,
            pricing: PricingView::from_report(report),
            legal: LegalSummary::from_report(report, scorer.policy()),
            issues: IssueSummary::from_report(report),
            images: ImageSummary::from_report(report),
        }
    }
}
