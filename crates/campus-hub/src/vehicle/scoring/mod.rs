mod config;
mod policy;
mod rules;

pub use config::ScoringWeights;
pub use policy::{
    classify_recommendation, classify_score_tier, Recommendation, ScoreTier, ScoreTierPolicy,
};
pub use rules::compute_overall_score;

use super::domain::AnalysisReport;
use serde::{Deserialize, Serialize};

/// Applies the weights and tier policy to a report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportScorer {
    weights: ScoringWeights,
    policy: ScoreTierPolicy,
}

impl ReportScorer {
    pub fn new(weights: ScoringWeights, policy: ScoreTierPolicy) -> Self {
        Self { weights, policy }
    }

    pub fn policy(&self) -> &ScoreTierPolicy {
        &self.policy
    }

    pub fn score(&self, report: &AnalysisReport) -> ScoreBreakdown {
        let visual = i32::from(report.visual_score);
        let legal = i32::from(report.legal_score);
        let suggested = report.suggested_price as f64;
        let market_max = report.market_value.max as f64;

        let overall =
            rules::weighted_overall(&self.weights, visual, legal, suggested, market_max);
        let recommendation = self.policy.recommendation(overall);

        let components = vec![
            ScoreComponent {
                factor: ScoreFactor::Visual,
                weight: self.weights.visual,
                contribution: f64::from(visual) * self.weights.visual,
            },
            ScoreComponent {
                factor: ScoreFactor::Legal,
                weight: self.weights.legal,
                contribution: f64::from(legal) * self.weights.legal,
            },
            ScoreComponent {
                factor: ScoreFactor::PricePosition,
                weight: self.weights.price,
                contribution: rules::price_position(suggested, market_max) * self.weights.price,
            },
        ];

        ScoreBreakdown {
            visual: self.card("Visual Condition", visual, "Based on AI image analysis"),
            legal: self.card("Legal Status", legal, "Based on historical records"),
            overall: self.card("Overall Rating", overall, recommendation.label()),
            recommendation,
            components,
        }
    }

    fn card(&self, title: &'static str, score: i32, description: &'static str) -> ScoreCard {
        ScoreCard {
            title,
            score,
            tier: self.policy.tier(f64::from(score)),
            description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Visual,
    Legal,
    PricePosition,
}

/// Weighted share of a single input, kept for transparency in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCard {
    pub title: &'static str,
    pub score: i32,
    pub tier: ScoreTier,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub visual: ScoreCard,
    pub legal: ScoreCard,
    pub overall: ScoreCard,
    pub recommendation: Recommendation,
    pub components: Vec<ScoreComponent>,
}
