/// Core data structures for analysis reports
///
/// This module defines the report value the engine renders and exports.
/// Field names follow the JSON emitted by the analysis backend, so a report
/// can be deserialized directly from a `/api/research` response body.
use crate::report::NumericValue;
use serde::{Deserialize, Serialize};

/// A finished market-research report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Narrative text, loosely Markdown-formatted
    pub report: String,

    /// Key themes in the order the analysis ranked them
    #[serde(default)]
    pub key_themes: Vec<String>,

    #[serde(default)]
    pub metrics: Vec<Metric>,

    /// Overall sentiment breakdown
    #[serde(rename = "sentiments", default)]
    pub sentiment: Sentiment,

    /// Per-aspect sentiment breakdown
    #[serde(rename = "aspect_sentiments_aggregated", default)]
    pub aspects: Vec<AspectSentiment>,

    /// Number of documents the analysis was grounded on
    #[serde(default)]
    pub retrieved_document_count: u64,

    /// Retrieval strategy used by the backend ("similarity", "mmr", ...)
    #[serde(default)]
    pub retrieval_method_used: String,
}

impl Report {
    /// Provenance sentence shared by the screen header and the exported document
    pub fn provenance_line(&self) -> String {
        format!(
            "Based on {} documents using {} search",
            self.retrieved_document_count, self.retrieval_method_used
        )
    }
}

/// Overall sentiment counts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub positive: NumericValue,
    #[serde(default)]
    pub neutral: NumericValue,
    #[serde(default)]
    pub negative: NumericValue,
}

/// Sentiment counts for one aspect of the product ("battery", "price", ...)
///
/// `total_mentions` is reported by the backend independently; it is not
/// guaranteed to equal the sum of the three polarity counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSentiment {
    pub aspect: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub total_mentions: NumericValue,
    #[serde(default)]
    pub positive_count: NumericValue,
    #[serde(default)]
    pub neutral_count: NumericValue,
    #[serde(default)]
    pub negative_count: NumericValue,
}

/// A headline figure shown on the metrics panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub title: String,
    pub value: NumericValue,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
