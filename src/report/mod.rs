//! Report rendering module - Data transformations for the screen.
//!
//! This module handles:
//! - Coercing numeric-or-text fields into numbers
//! - Aggregating sentiment counts into percentages
//! - Segmenting the narrative into display blocks
//! - Composing the screen view
//! - Export of the screen view to JSON and Markdown
//!
//! Console drawing is handled by the console_format module; the paginated
//! document lives in the pdf module.
//!
//! # Module Organization
//!
//! - `numeric` - NumericValue and its single coercion function
//! - `sentiment` - Percentages of total for the three polarities
//! - `blocks` - Narrative text to Heading/BulletList/Paragraph blocks
//! - `screen` - The ScreenView structure and its builder
//! - `export` - JSON and Markdown files of a ScreenView

mod blocks;
mod export;
mod numeric;
mod screen;
mod sentiment;

pub use numeric::{NumericValue, format_number};

pub use sentiment::{SentimentBreakdown, aggregate};

pub use blocks::{TextBlock, parse_blocks};

pub use screen::{
    AspectCard, BADGE_PALETTE, BadgeVariant, MetricCard, Polarity, PolarityReading, SCREEN_TITLE, ScreenView,
    SentimentPanel, ThemeBadge, badge_variant, render_for_screen,
};

pub use export::{export_json_view, export_markdown_report, format_markdown_report};
