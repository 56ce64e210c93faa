//! Narrative text segmentation.
//!
//! The narrative is loosely Markdown: paragraphs separated by blank lines,
//! `#`/`##` headings and `-` bullet lists. Only those three shapes are
//! recognised; anything else (including `###` headings) is a paragraph.

use serde::Serialize;

const PARAGRAPH_SEPARATOR: &str = "\n\n";
const BULLET_SEPARATOR: &str = "\n- ";
const BULLET_PREFIX: &str = "- ";

/// One classified unit of narrative text, in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextBlock {
    Heading { level: u8, text: String },
    BulletList { items: Vec<String> },
    Paragraph { text: String },
}

impl TextBlock {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        TextBlock::Heading { level, text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        TextBlock::Paragraph { text: text.into() }
    }

    pub fn bullets<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Self {
        TextBlock::BulletList { items: items.into_iter().map(Into::into).collect() }
    }
}

/// Split narrative text into blocks.
///
/// Never fails: every non-blank segment becomes some block.
pub fn parse_blocks(text: &str) -> Vec<TextBlock> {
    text.split(PARAGRAPH_SEPARATOR)
        .filter(|candidate| !candidate.trim().is_empty())
        .map(classify)
        .collect()
}

fn classify(candidate: &str) -> TextBlock {
    if let Some(rest) = candidate.strip_prefix("# ") {
        TextBlock::heading(1, rest)
    } else if let Some(rest) = candidate.strip_prefix("## ") {
        TextBlock::heading(2, rest)
    } else if candidate.starts_with(BULLET_PREFIX) {
        // The first item keeps its "- " after the split; the strip below
        // handles it together with any item that still carries one.
        let items = candidate
            .split(BULLET_SEPARATOR)
            .map(|item| item.strip_prefix(BULLET_PREFIX).unwrap_or(item).to_string())
            .collect();
        TextBlock::BulletList { items }
    } else {
        TextBlock::paragraph(candidate)
    }
}

#[cfg(test)]
#[path = "blocks_test.rs"]
mod blocks_test;
