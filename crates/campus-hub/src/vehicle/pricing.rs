//! Seller quote comparison, price chart series, and rupee formatting.

use serde::Serialize;

use super::domain::PriceEstimate;

/// How a seller's quote relates to the suggested price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PriceComparison {
    /// No quote was given.
    Unavailable,
    Available {
        overpriced: bool,
        delta_absolute: f64,
        /// Percentage of the quote; zero when the quote is zero or negative.
        delta_percent: f64,
    },
}

/// Compares a quote against the suggested price. Never fails: a missing quote
/// yields `Unavailable` and a zero quote yields a zero percentage.
pub fn compare_price(suggested_price: f64, quoted_price: Option<f64>) -> PriceComparison {
    let Some(quoted) = quoted_price else {
        return PriceComparison::Unavailable;
    };

    let delta_absolute = (quoted - suggested_price).abs();
    let delta_percent = if quoted > 0.0 && quoted.is_finite() {
        delta_absolute / quoted * 100.0
    } else {
        0.0
    };

    PriceComparison::Available {
        overpriced: quoted > suggested_price,
        delta_absolute,
        delta_percent,
    }
}

impl PriceComparison {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    pub fn is_overpriced(&self) -> bool {
        matches!(
            self,
            Self::Available {
                overpriced: true,
                ..
            }
        )
    }

    pub fn badge(&self) -> Option<PriceBadge> {
        match *self {
            Self::Unavailable => None,
            Self::Available {
                overpriced: true,
                delta_absolute,
                ..
            } => Some(PriceBadge::Overpriced { by: delta_absolute }),
            Self::Available { .. } => Some(PriceBadge::GoodDeal),
        }
    }

    /// Negotiation advice shown beside the price breakdown.
    pub fn bargaining_tip(&self) -> String {
        match *self {
            Self::Available {
                overpriced: true,
                delta_percent,
                ..
            } => format!(
                "The vehicle is overpriced by about {delta_percent:.1}%. Consider negotiating by pointing out the visual condition issues."
            ),
            _ => "This is priced fairly based on market conditions. If negotiating, focus on the minor issues found during inspection.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceBadge {
    Overpriced { by: f64 },
    GoodDeal,
}

impl PriceBadge {
    pub fn label(&self) -> String {
        match self {
            Self::Overpriced { by } => format!("Overpriced by {}", format_rupees(*by)),
            Self::GoodDeal => "Good Deal".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePointKind {
    Market,
    Suggested,
    QuotedAbove,
    QuotedWithin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricePoint {
    pub label: &'static str,
    pub value: f64,
    pub kind: PricePointKind,
}

/// Bars for the price chart. The quote bar is present only for a positive quote.
pub fn price_chart_series(
    market: &PriceEstimate,
    suggested_price: f64,
    quoted_price: Option<f64>,
) -> Vec<PricePoint> {
    let market_point = |label, value: u64| PricePoint {
        label,
        value: value as f64,
        kind: PricePointKind::Market,
    };

    let mut series = vec![
        market_point("Market Min", market.min),
        market_point("Market Max", market.max),
        market_point("Dealer Avg", market.dealer_avg),
        market_point("Direct Sell Avg", market.direct_sell_avg),
        PricePoint {
            label: "Suggested",
            value: suggested_price,
            kind: PricePointKind::Suggested,
        },
    ];

    if let Some(quoted) = quoted_price.filter(|quoted| *quoted > 0.0) {
        series.push(PricePoint {
            label: "Quoted Price",
            value: quoted,
            kind: if quoted > suggested_price {
                PricePointKind::QuotedAbove
            } else {
                PricePointKind::QuotedWithin
            },
        });
    }

    series
}

/// Axis tick label: lakhs with one decimal from 1,00,000 up, thousands below.
pub fn format_axis_price(value: f64) -> String {
    if value >= 100_000.0 {
        format!("₹{:.1}L", value / 100_000.0)
    } else {
        format!("₹{:.0}K", value / 1_000.0)
    }
}

/// Full amount with thousands separators (`₹650,000`).
/// Paise are shown only when present.
pub fn format_rupees(value: f64) -> String {
    if !value.is_finite() {
        return "₹-".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);

    match cents % 100 {
        0 => format!("{sign}₹{whole}"),
        fraction if fraction % 10 == 0 => format!("{sign}₹{whole}.{}", fraction / 10),
        fraction => format!("{sign}₹{whole}.{fraction:02}"),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn formats_fractional_rupees() {
        assert_eq!(format_rupees(1500.5), "₹1,500.5");
        assert_eq!(format_rupees(99.25), "₹99.25");
        assert_eq!(format_rupees(-30_000.0), "-₹30,000");
        assert_eq!(format_rupees(f64::NAN), "₹-");
    }
}
