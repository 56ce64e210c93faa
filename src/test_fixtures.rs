//! Report fixtures shared by unit tests.

use crate::types::{AspectSentiment, Report, Sentiment};

pub const SAMPLE_REPORT_JSON: &str = include_str!("../tests/fixtures/sample_report.json");
pub const EMPTY_REPORT_JSON: &str = include_str!("../tests/fixtures/empty_report.json");

pub fn sample_report() -> Report {
    serde_json::from_str(SAMPLE_REPORT_JSON).expect("sample fixture should parse")
}

pub fn empty_report() -> Report {
    serde_json::from_str(EMPTY_REPORT_JSON).expect("empty fixture should parse")
}

/// A minimal report with the given narrative, themes and aspect names
pub fn report_with(narrative: &str, themes: &[&str], aspects: &[&str]) -> Report {
    Report {
        report: narrative.to_string(),
        key_themes: themes.iter().map(|t| t.to_string()).collect(),
        metrics: vec![],
        sentiment: Sentiment {
            description: String::new(),
            positive: "3".into(),
            neutral: 1.0.into(),
            negative: "1".into(),
        },
        aspects: aspects
            .iter()
            .map(|name| AspectSentiment {
                aspect: name.to_string(),
                summary: format!("Summary of {}", name),
                total_mentions: "10".into(),
                positive_count: "5".into(),
                neutral_count: "3".into(),
                negative_count: "2".into(),
            })
            .collect(),
        retrieved_document_count: 12,
        retrieval_method_used: "similarity".to_string(),
    }
}
