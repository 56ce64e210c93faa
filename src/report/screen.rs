//! Screen rendering model.
//!
//! Composes the parsed narrative, the aggregated sentiment and the raw
//! theme/aspect/metric lists into one display structure. No computation
//! happens here beyond what the parser and aggregator already did; the
//! console presenter and the view exporters only read this structure.

use super::blocks::{TextBlock, parse_blocks};
use super::sentiment::{SentimentBreakdown, aggregate};
use crate::types::{AspectSentiment, Metric, Report};
use serde::Serialize;

pub const SCREEN_TITLE: &str = "Research Report";

/// Visual variant of a theme badge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    #[default]
    Default,
}

/// Badge palette, in assignment order.
pub const BADGE_PALETTE: [BadgeVariant; 6] = [
    BadgeVariant::Primary,
    BadgeVariant::Secondary,
    BadgeVariant::Success,
    BadgeVariant::Warning,
    BadgeVariant::Error,
    BadgeVariant::Default,
];

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Error => "error",
            BadgeVariant::Default => "default",
        }
    }
}

/// Pick the palette entry for the theme at `index`; `None` for an empty palette
pub fn badge_variant(index: usize, palette: &[BadgeVariant]) -> Option<BadgeVariant> {
    let slot = index.checked_rem(palette.len())?;
    palette.get(slot).copied()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeBadge {
    pub text: String,
    pub variant: BadgeVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Neutral,
    Negative,
}

impl Polarity {
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Neutral => "Neutral",
            Polarity::Negative => "Negative",
        }
    }
}

/// One column of the sentiment panel: "62.5%" over "(25)"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolarityReading {
    pub polarity: Polarity,
    pub percent: f64,
    pub percent_display: String,
    /// The value as received, not the coerced count
    pub count_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentPanel {
    pub description: String,
    pub breakdown: SentimentBreakdown,
    pub readings: [PolarityReading; 3],
}

/// Aspect summary card; every count is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectCard {
    pub aspect: String,
    pub summary: String,
    pub positive: String,
    pub neutral: String,
    pub negative: String,
    pub total_mentions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Everything the dashboard shows for one report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenView {
    pub title: String,
    pub provenance: String,
    pub blocks: Vec<TextBlock>,
    pub sentiment: SentimentPanel,
    pub themes: Vec<ThemeBadge>,
    pub aspects: Vec<AspectCard>,
    pub metrics: Vec<MetricCard>,
}

/// Build the display structure for a report. Pure and deterministic.
pub fn render_for_screen(report: &Report) -> ScreenView {
    ScreenView {
        title: SCREEN_TITLE.to_string(),
        provenance: report.provenance_line(),
        blocks: parse_blocks(&report.report),
        sentiment: sentiment_panel(report),
        themes: theme_badges(&report.key_themes),
        aspects: report.aspects.iter().map(aspect_card).collect(),
        metrics: report.metrics.iter().map(metric_card).collect(),
    }
}

fn sentiment_panel(report: &Report) -> SentimentPanel {
    let s = &report.sentiment;
    let breakdown = aggregate(&s.positive, &s.neutral, &s.negative);

    let reading = |polarity: Polarity, percent: f64, raw: &crate::report::NumericValue| PolarityReading {
        polarity,
        percent,
        percent_display: SentimentBreakdown::format_percent(percent),
        count_display: format!("({})", raw),
    };

    SentimentPanel {
        description: s.description.clone(),
        breakdown,
        readings: [
            reading(Polarity::Positive, breakdown.positive_percent, &s.positive),
            reading(Polarity::Neutral, breakdown.neutral_percent, &s.neutral),
            reading(Polarity::Negative, breakdown.negative_percent, &s.negative),
        ],
    }
}

fn theme_badges(themes: &[String]) -> Vec<ThemeBadge> {
    themes
        .iter()
        .enumerate()
        .map(|(i, theme)| ThemeBadge { text: theme.clone(), variant: badge_variant(i, &BADGE_PALETTE).unwrap_or_default() })
        .collect()
}

fn aspect_card(aspect: &AspectSentiment) -> AspectCard {
    AspectCard {
        aspect: aspect.aspect.clone(),
        summary: aspect.summary.clone(),
        positive: aspect.positive_count.to_string(),
        neutral: aspect.neutral_count.to_string(),
        negative: aspect.negative_count.to_string(),
        total_mentions: aspect.total_mentions.to_string(),
    }
}

fn metric_card(metric: &Metric) -> MetricCard {
    let description = Some(metric.description.clone()).filter(|d| !d.trim().is_empty());
    MetricCard { title: metric.title.clone(), value: metric.value.to_string(), description }
}

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;
