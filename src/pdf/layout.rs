//! Paginated layout of an exported report.
//!
//! Coordinates are millimetres on an A4 page with the origin at the top-left
//! corner, y growing downwards. The layout pass threads a [`LayoutContext`]
//! by value through each emission step; every step returns the updated
//! context, so any step can be exercised on its own.
//!
//! Page-break checks happen only before the aspect section and once at the
//! top of each aspect. The narrative, the theme list and an aspect's inner
//! lines are not re-checked and may run past the bottom of the page; their
//! text is still present in the document.

use super::wrap::TextMeasure;
use crate::types::{AspectSentiment, Report, Sentiment};
use chrono::{DateTime, Local};
use log::debug;

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
pub const LEFT_MARGIN: f64 = 20.0;
/// Cursor position at the top of every page
pub const TOP_MARGIN: f64 = 20.0;
/// Content below this offset requires a page break first
pub const PAGE_BOTTOM: f64 = 250.0;
pub const WRAP_WIDTH: f64 = 170.0;
pub const LINE_ADVANCE: f64 = 7.0;
/// Gap before a section header
pub const SECTION_ADVANCE: f64 = 2.0 * LINE_ADVANCE;

pub const TITLE_Y: f64 = 20.0;
pub const TIMESTAMP_Y: f64 = 30.0;
pub const PROVENANCE_Y: f64 = 40.0;
pub const NARRATIVE_Y: f64 = 50.0;

pub const DOCUMENT_TITLE: &str = "Market Research Report";

/// What a line of text is, which also decides how it is set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Title,
    Timestamp,
    Provenance,
    Narrative,
    SectionHeader,
    Theme,
    SentimentCount,
    AspectName,
    AspectSummary,
    AspectMentions,
}

impl LineRole {
    /// Font size in points
    pub fn font_size(&self) -> f64 {
        match self {
            LineRole::Title => 20.0,
            LineRole::SectionHeader => 14.0,
            LineRole::Timestamp | LineRole::Provenance => 10.0,
            _ => 11.0,
        }
    }

    pub fn bold(&self) -> bool {
        matches!(self, LineRole::Title | LineRole::SectionHeader | LineRole::AspectName)
    }
}

/// A single positioned line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x: f64,
    pub y: f64,
    pub role: LineRole,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<TextLine>,
}

/// The laid-out document, ready to be encoded
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub title: String,
    pub generated_at: DateTime<Local>,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every line in reading order, across pages
    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.pages.iter().flat_map(|p| p.lines.iter())
    }

    /// Texts of all lines with the given role, in reading order
    pub fn texts_with_role(&self, role: LineRole) -> Vec<&str> {
        self.lines().filter(|l| l.role == role).map(|l| l.text.as_str()).collect()
    }
}

/// Vertical position and current page (1-based)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    pub y: f64,
    pub page: usize,
}

impl LayoutCursor {
    pub fn top() -> Self {
        Self { y: TOP_MARGIN, page: 1 }
    }

    pub fn advance(self, by: f64) -> Self {
        Self { y: self.y + by, ..self }
    }

    pub fn needs_page_break(&self) -> bool {
        self.y > PAGE_BOTTOM
    }
}

/// Layout state threaded through every step
#[derive(Debug, Clone)]
pub struct LayoutContext {
    pub cursor: LayoutCursor,
    pub document: Document,
}

impl LayoutContext {
    pub fn new(generated_at: DateTime<Local>) -> Self {
        Self {
            cursor: LayoutCursor::top(),
            document: Document { title: DOCUMENT_TITLE.to_string(), generated_at, pages: vec![Page::default()] },
        }
    }

    /// Write a line at an explicit offset on the current page
    pub fn place(mut self, y: f64, role: LineRole, text: impl Into<String>) -> Self {
        let line = TextLine { x: LEFT_MARGIN, y, role, text: text.into() };
        if let Some(page) = self.document.pages.last_mut() {
            page.lines.push(line);
        }
        self
    }

    /// Write a line at the cursor
    pub fn emit(self, role: LineRole, text: impl Into<String>) -> Self {
        let y = self.cursor.y;
        self.place(y, role, text)
    }

    /// Advance one line, then write at the cursor
    pub fn emit_next(self, role: LineRole, text: impl Into<String>) -> Self {
        self.advance(LINE_ADVANCE).emit(role, text)
    }

    pub fn advance(mut self, by: f64) -> Self {
        self.cursor = self.cursor.advance(by);
        self
    }

    /// Start a new page if the cursor has passed the usable height
    pub fn ensure_page_room(mut self) -> Self {
        if self.cursor.needs_page_break() {
            debug!("page break at y={:.1} on page {}", self.cursor.y, self.cursor.page);
            self.document.pages.push(Page::default());
            self.cursor = LayoutCursor { y: TOP_MARGIN, page: self.cursor.page + 1 };
        }
        self
    }

    pub fn finish(self) -> Document {
        self.document
    }
}

/// Lay out the full export document for a report.
pub fn layout_document(report: &Report, generated_at: DateTime<Local>) -> Document {
    let timestamp = format!("Generated on: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));

    let ctx = LayoutContext::new(generated_at);
    let ctx = emit_preamble(ctx, &timestamp, &report.provenance_line());
    let ctx = emit_narrative(ctx, &report.report);
    let ctx = emit_themes(ctx, &report.key_themes);
    let ctx = emit_sentiment(ctx, &report.sentiment);
    let ctx = ctx.ensure_page_room();
    let ctx = emit_aspects(ctx, &report.aspects);

    let document = ctx.finish();
    debug!("laid out {} page(s)", document.page_count());
    document
}

/// Title, timestamp and provenance at fixed offsets on page 1
pub fn emit_preamble(ctx: LayoutContext, timestamp: &str, provenance: &str) -> LayoutContext {
    ctx.place(TITLE_Y, LineRole::Title, DOCUMENT_TITLE)
        .place(TIMESTAMP_Y, LineRole::Timestamp, timestamp)
        .place(PROVENANCE_Y, LineRole::Provenance, provenance)
}

/// Raw narrative, wrapped to the column width. Leaves the cursor below the
/// last wrapped line.
pub fn emit_narrative(ctx: LayoutContext, narrative: &str) -> LayoutContext {
    let measure = TextMeasure::new(LineRole::Narrative.font_size());
    let lines = measure.split_text_to_size(narrative, WRAP_WIDTH);
    let count = lines.len();

    let mut ctx = ctx;
    for (i, line) in lines.into_iter().enumerate() {
        ctx = ctx.place(NARRATIVE_Y + i as f64 * LINE_ADVANCE, LineRole::Narrative, line);
    }

    ctx.cursor.y = NARRATIVE_Y;
    ctx.advance(count as f64 * LINE_ADVANCE)
}

/// "Key Themes" header at the cursor, then one bulleted line per theme
pub fn emit_themes(ctx: LayoutContext, themes: &[String]) -> LayoutContext {
    themes
        .iter()
        .fold(ctx.emit(LineRole::SectionHeader, "Key Themes"), |ctx, theme| {
            ctx.emit_next(LineRole::Theme, format!("\u{2022} {}", theme))
        })
}

/// "Sentiment Analysis" header and the three raw counts
pub fn emit_sentiment(ctx: LayoutContext, sentiment: &Sentiment) -> LayoutContext {
    ctx.advance(SECTION_ADVANCE)
        .emit(LineRole::SectionHeader, "Sentiment Analysis")
        .emit_next(LineRole::SentimentCount, format!("Positive: {}", sentiment.positive))
        .emit_next(LineRole::SentimentCount, format!("Neutral: {}", sentiment.neutral))
        .emit_next(LineRole::SentimentCount, format!("Negative: {}", sentiment.negative))
}

/// "Aspect Analysis" header and three lines per aspect
pub fn emit_aspects(ctx: LayoutContext, aspects: &[AspectSentiment]) -> LayoutContext {
    let ctx = ctx.advance(SECTION_ADVANCE).emit(LineRole::SectionHeader, "Aspect Analysis");
    aspects.iter().fold(ctx, emit_aspect)
}

/// One aspect block; the page check covers its first line only
pub fn emit_aspect(ctx: LayoutContext, aspect: &AspectSentiment) -> LayoutContext {
    ctx.ensure_page_room()
        .emit_next(LineRole::AspectName, aspect.aspect.as_str())
        .emit_next(LineRole::AspectSummary, aspect.summary.as_str())
        .emit_next(LineRole::AspectMentions, format!("Total mentions: {}", aspect.total_mentions))
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;
