/// Tests for report data structures
#[cfg(test)]
mod tests {
    use crate::report::NumericValue;
    use crate::test_fixtures::{empty_report, sample_report};
    use crate::types::Report;

    #[test]
    fn test_sample_report_deserializes_backend_field_names() {
        let report = sample_report();
        assert_eq!(report.key_themes.len(), 7);
        assert_eq!(report.aspects.len(), 3);
        assert_eq!(report.sentiment.positive, NumericValue::Text("120".to_string()));
        assert_eq!(report.sentiment.neutral, NumericValue::Number(35.0));
        assert_eq!(report.retrieved_document_count, 25);
        assert_eq!(report.retrieval_method_used, "similarity");
    }

    #[test]
    fn test_missing_provenance_defaults() {
        let report = empty_report();
        assert_eq!(report.retrieved_document_count, 0);
        assert_eq!(report.retrieval_method_used, "");
        assert!(report.aspects.is_empty());
    }

    #[test]
    fn test_minimal_report_only_needs_narrative() {
        let report: Report = serde_json::from_str(r#"{"report": "Just text"}"#).unwrap();
        assert_eq!(report.report, "Just text");
        assert!(report.key_themes.is_empty());
        assert_eq!(report.sentiment.positive, NumericValue::Number(0.0));
    }

    #[test]
    fn test_provenance_line() {
        assert_eq!(sample_report().provenance_line(), "Based on 25 documents using similarity search");
    }

    #[test]
    fn test_serialization_keeps_wire_names() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert!(json.get("sentiments").is_some());
        assert!(json.get("aspect_sentiments_aggregated").is_some());
        assert_eq!(json["sentiments"]["positive"], "120");
    }
}
