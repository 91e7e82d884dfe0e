use serde::{Deserialize, Serialize};

/// Lower bounds of the excellent, good, and fair bands. Every score-coloured
/// element and the recommendation ladder read from the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTierPolicy {
    pub excellent: i32,
    pub good: i32,
    pub fair: i32,
}

impl ScoreTierPolicy {
    pub const STANDARD: ScoreTierPolicy = ScoreTierPolicy {
        excellent: 80,
        good: 60,
        fair: 40,
    };

    /// Bands are inclusive at the lower bound. NaN lands in `Poor`.
    pub fn tier(&self, score: f64) -> ScoreTier {
        if score >= f64::from(self.excellent) {
            ScoreTier::Excellent
        } else if score >= f64::from(self.good) {
            ScoreTier::Good
        } else if score >= f64::from(self.fair) {
            ScoreTier::Fair
        } else {
            ScoreTier::Poor
        }
    }

    pub fn recommendation(&self, overall_score: i32) -> Recommendation {
        Recommendation::from(self.tier(f64::from(overall_score)))
    }
}

impl Default for ScoreTierPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ScoreTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Progress bar colour.
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Excellent => "green",
            Self::Good => "amber",
            Self::Fair => "orange",
            Self::Poor => "red",
        }
    }

    pub const fn legal_narrative(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent legal status with minimal issues",
            Self::Good => "Good legal status with some minor issues",
            Self::Fair => "Several legal issues that should be addressed",
            Self::Poor => "Significant legal problems that require attention",
        }
    }
}

/// Purchase advice derived from the overall rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    HighlyRecommended,
    Recommended,
    AcceptableWithRepairs,
    NotRecommended,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly Recommended",
            Self::Recommended => "Recommended",
            Self::AcceptableWithRepairs => "Acceptable with Repairs",
            Self::NotRecommended => "Not Recommended",
        }
    }

    pub const fn tier(self) -> ScoreTier {
        match self {
            Self::HighlyRecommended => ScoreTier::Excellent,
            Self::Recommended => ScoreTier::Good,
            Self::AcceptableWithRepairs => ScoreTier::Fair,
            Self::NotRecommended => ScoreTier::Poor,
        }
    }
}

impl From<ScoreTier> for Recommendation {
    fn from(tier: ScoreTier) -> Self {
        match tier {
            ScoreTier::Excellent => Self::HighlyRecommended,
            ScoreTier::Good => Self::Recommended,
            ScoreTier::Fair => Self::AcceptableWithRepairs,
            ScoreTier::Poor => Self::NotRecommended,
        }
    }
}

pub fn classify_score_tier(score: f64) -> ScoreTier {
    ScoreTierPolicy::STANDARD.tier(score)
}

pub fn classify_recommendation(overall_score: i32) -> Recommendation {
    ScoreTierPolicy::STANDARD.recommendation(overall_score)
}
