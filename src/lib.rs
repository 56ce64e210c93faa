//! Rendering and export engine for market-research reports.
//!
//! A finished [`Report`] is turned into two things:
//! - a [`ScreenView`] for display ([`render_for_screen`]), and
//! - a paginated PDF document ([`Exporter::export`], [`layout_document`]).
//!
//! The command-line front end in `main.rs` loads a report through a
//! [`ReportSource`], draws the screen view with [`console_format`] and
//! triggers the export.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod console_format;
pub mod error;
pub mod pdf;
pub mod report;
pub mod source;
pub mod types;
pub mod ui;

#[cfg(test)]
mod test_fixtures;

pub use clipboard::{Clipboard, WriterClipboard, copy_report};
pub use error::{ExportError, SourceError};
pub use pdf::{ARTIFACT_NAME, Document, Exporter, LayoutCursor, export_document, layout_document};
pub use report::{NumericValue, ScreenView, SentimentBreakdown, TextBlock, aggregate, parse_blocks, render_for_screen};
pub use source::{JsonFileSource, ReportSource};
pub use types::{AspectSentiment, Metric, Report, Sentiment};
