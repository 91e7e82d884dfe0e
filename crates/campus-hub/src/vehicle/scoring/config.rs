use serde::{Deserialize, Serialize};

/// Weights of the three inputs to the overall rating. They sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub visual: f64,
    pub legal: f64,
    pub price: f64,
}

impl ScoringWeights {
    pub const STANDARD: ScoringWeights = ScoringWeights {
        visual: 0.4,
        legal: 0.4,
        price: 0.2,
    };
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}
