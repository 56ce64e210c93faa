//! Sentiment aggregation: raw polarity counts to percentages of total.

use super::numeric::NumericValue;
use log::warn;
use serde::Serialize;

/// Coerced counts and their share of the total.
///
/// Percentages are unrounded; formatting to one decimal place is a
/// presentation concern (see [`SentimentBreakdown::format_percent`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub positive_percent: f64,
    pub neutral_percent: f64,
    pub negative_percent: f64,
}

impl SentimentBreakdown {
    /// Sum of the three coerced counts
    pub fn total(&self) -> f64 {
        self.positive + self.neutral + self.negative
    }

    /// One-decimal display form, e.g. `"62.5%"`
    pub fn format_percent(percent: f64) -> String {
        format!("{:.1}%", percent)
    }
}

/// Aggregate three numeric-or-string counts.
///
/// Values that do not coerce to a non-negative number count as zero. When
/// the total is zero every percentage is zero.
pub fn aggregate(positive: &NumericValue, neutral: &NumericValue, negative: &NumericValue) -> SentimentBreakdown {
    for (label, value) in [("positive", positive), ("neutral", neutral), ("negative", negative)] {
        if value.is_invalid_count() {
            warn!("sentiment {} value {:?} is not a count, treating as 0", label, value);
        }
    }

    let positive = positive.as_count();
    let neutral = neutral.as_count();
    let negative = negative.as_count();
    let total = positive + neutral + negative;

    let percent = |x: f64| if total > 0.0 { x / total * 100.0 } else { 0.0 };

    SentimentBreakdown {
        positive,
        neutral,
        negative,
        positive_percent: percent(positive),
        neutral_percent: percent(neutral),
        negative_percent: percent(negative),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: f64) -> NumericValue {
        NumericValue::Number(v)
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let triples = [(1.0, 1.0, 1.0), (120.0, 35.0, 45.0), (0.0, 0.0, 9.0), (0.5, 2.25, 7.0)];
        for (p, u, g) in triples {
            let b = aggregate(&n(p), &n(u), &n(g));
            let sum = b.positive_percent + b.neutral_percent + b.negative_percent;
            assert!((sum - 100.0).abs() < 1e-9, "sum was {} for {:?}", sum, (p, u, g));
        }
    }

    #[test]
    fn test_all_zero_gives_zero_percentages() {
        let b = aggregate(&n(0.0), &NumericValue::from("0"), &n(0.0));
        assert_eq!(b.positive_percent, 0.0);
        assert_eq!(b.neutral_percent, 0.0);
        assert_eq!(b.negative_percent, 0.0);
        assert!(!b.positive_percent.is_nan());
    }

    #[test]
    fn test_string_counts_are_coerced() {
        let b = aggregate(&NumericValue::from("30"), &NumericValue::from("10"), &NumericValue::from("10"));
        assert_eq!(b.positive, 30.0);
        assert_eq!(b.positive_percent, 60.0);
        assert_eq!(b.neutral_percent, 20.0);
    }

    #[test]
    fn test_non_numeric_counts_as_zero() {
        let b = aggregate(&NumericValue::from("unknown"), &n(1.0), &n(3.0));
        assert_eq!(b.positive, 0.0);
        assert_eq!(b.neutral_percent, 25.0);
        assert_eq!(b.negative_percent, 75.0);
    }

    #[test]
    fn test_format_percent_one_decimal() {
        assert_eq!(SentimentBreakdown::format_percent(100.0 / 3.0), "33.3%");
        assert_eq!(SentimentBreakdown::format_percent(0.0), "0.0%");
    }
}
