//! Paginated document export.
//!
//! - `wrap` - text measurement and column wrapping
//! - `layout` - the cursor-driven layout pass producing a [`Document`]
//! - `writer` - PDF encoding of a laid-out document
//!
//! [`Exporter::export`] runs the layout synchronously and suspends once, while
//! the encoded bytes are written to disk.

mod layout;
mod wrap;
mod writer;

pub use layout::{
    Document, LayoutContext, LayoutCursor, LineRole, Page, TextLine, emit_aspect, emit_aspects, emit_narrative,
    emit_preamble, emit_sentiment, emit_themes, layout_document,
};
pub use wrap::TextMeasure;
pub use writer::encode_pdf;

use crate::error::ExportError;
use crate::types::Report;
use chrono::Local;
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

/// File name of the exported document; repeated exports overwrite it
pub const ARTIFACT_NAME: &str = "market-research-report.pdf";

/// Exports reports into a fixed directory.
///
/// Clones share the "exporting" state, so a front end can hold one clone to
/// poll [`Exporter::is_exporting`] while another runs the export. Nothing is
/// locked: each export owns its layout state, and the artifact is replaced
/// atomically, so concurrent exports end with one complete document.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    in_flight: Arc<AtomicUsize>,
}

impl Exporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), in_flight: Arc::new(AtomicUsize::new(0)) }
    }

    /// Where the artifact will be written
    pub fn artifact_path(&self) -> PathBuf {
        self.output_dir.join(ARTIFACT_NAME)
    }

    /// True while at least one export is pending
    pub fn is_exporting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Lay out, encode and write the report. Returns the artifact path.
    ///
    /// On failure the previous artifact (if any) is left untouched.
    pub async fn export(&self, report: &Report) -> Result<PathBuf, ExportError> {
        let _pending = Pending::start(&self.in_flight);

        let document = layout_document(report, Local::now());
        let bytes = encode_pdf(&document);
        let path = self.artifact_path();
        debug!("encoded {} page(s), {} bytes for {}", document.page_count(), bytes.len(), path.display());

        let target = path.clone();
        tokio::task::spawn_blocking(move || write_artifact(&target, &bytes))
            .await
            .map_err(|e| ExportError::Interrupted(e.to_string()))?
            .map_err(|source| ExportError::Emission { path: path.clone(), source })?;

        Ok(path)
    }
}

/// Export a report into `output_dir` with a fresh [`Exporter`]
pub async fn export_document(report: &Report, output_dir: &Path) -> Result<PathBuf, ExportError> {
    Exporter::new(output_dir).export(report).await
}

/// Counts one export for its lifetime, on every exit path
struct Pending<'a>(&'a AtomicUsize);

impl<'a> Pending<'a> {
    fn start(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Pending(counter)
    }
}

impl Drop for Pending<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Write bytes to a temporary sibling of `path` and rename it into place, so
/// a failed write never leaves a truncated artifact.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
