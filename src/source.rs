//! Loading finished reports.
//!
//! The engine does not produce reports; it receives them. [`ReportSource`] is
//! the seam where a report arrives, and [`JsonFileSource`] reads the JSON
//! body the analysis backend returns from a file or standard input.

use crate::error::SourceError;
use crate::types::Report;
use log::debug;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Anything that can hand over a finished report
pub trait ReportSource {
    fn fetch_report(&self) -> Result<Report, SourceError>;
}

/// Report stored as JSON in a file, or on stdin when the path is `-`
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN_PATH
    }

    fn origin(&self) -> String {
        if self.is_stdin() { "stdin".to_string() } else { self.path.display().to_string() }
    }
}

impl ReportSource for JsonFileSource {
    fn fetch_report(&self) -> Result<Report, SourceError> {
        let origin = self.origin();
        debug!("loading report from {}", origin);

        let body = if self.is_stdin() {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| SourceError::Read { origin: origin.clone(), source })?;
            buf
        } else {
            std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read { origin: origin.clone(), source })?
        };

        report_from_json(&body, &origin)
    }
}

/// Parse a report body; `origin` only labels errors
pub fn report_from_json(body: &str, origin: &str) -> Result<Report, SourceError> {
    serde_json::from_str(body).map_err(|source| SourceError::Parse { origin: origin.to_string(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::SAMPLE_REPORT_JSON;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_report_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        fs::write(&path, SAMPLE_REPORT_JSON).unwrap();

        let report = JsonFileSource::new(&path).fetch_report().unwrap();

        assert_eq!(report.key_themes.len(), 7);
        assert_eq!(report.retrieval_method_used, "similarity");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        let err = JsonFileSource::new(&path).fetch_report().unwrap_err();

        assert!(matches!(err, SourceError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = report_from_json("{\"report\": 42}", "inline").unwrap_err();
        assert!(matches!(err, SourceError::Parse { ref origin, .. } if origin == "inline"));
    }

    #[test]
    fn test_dash_means_stdin() {
        let source = JsonFileSource::new(STDIN_PATH);
        assert!(source.is_stdin());
        assert_eq!(source.origin(), "stdin");
    }
}
