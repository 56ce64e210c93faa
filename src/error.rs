//! Error types surfaced by the library.
//!
//! Coercion and parsing never fail, so only loading a report and emitting
//! the exported document have error kinds.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a report from its source
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read report from {origin}: {source}")]
    Read {
        origin: String,
        #[source]
        source: io::Error,
    },

    #[error("report from {origin} is not valid JSON: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to export a report; no artifact is left behind
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Emission {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("export task did not complete: {0}")]
    Interrupted(String),
}
