use super::config::ScoringWeights;

/// `round(visual*0.4 + legal*0.4 + (suggested/market_max)*100*0.2)`, halves
/// rounded up. A suggested price above the market maximum can push the result
/// past 100; it is returned as-is.
pub fn compute_overall_score(
    visual_score: i32,
    legal_score: i32,
    suggested_price: f64,
    market_max: f64,
) -> i32 {
    weighted_overall(
        &ScoringWeights::STANDARD,
        visual_score,
        legal_score,
        suggested_price,
        market_max,
    )
}

pub(crate) fn weighted_overall(
    weights: &ScoringWeights,
    visual_score: i32,
    legal_score: i32,
    suggested_price: f64,
    market_max: f64,
) -> i32 {
    let raw = f64::from(visual_score) * weights.visual
        + f64::from(legal_score) * weights.legal
        + price_position(suggested_price, market_max) * weights.price;
    round_half_up(raw)
}

/// Suggested price as a percentage of the market maximum; zero when the
/// maximum is zero, negative, or not finite.
pub(crate) fn price_position(suggested_price: f64, market_max: f64) -> f64 {
    if market_max > 0.0 && market_max.is_finite() && suggested_price.is_finite() {
        suggested_price / market_max * 100.0
    } else {
        0.0
    }
}

pub(crate) fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
