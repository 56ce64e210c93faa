//! PDF encoding of a laid-out document.
//!
//! Emits one content stream per page using the two standard Type1 fonts
//! (Helvetica, Helvetica-Bold), so no font data needs embedding. Layout
//! coordinates (millimetres, top-left origin) are converted to PDF points
//! with a bottom-left origin here and nowhere else.

use super::layout::{Document, PAGE_HEIGHT, PAGE_WIDTH, TextLine};
use chrono::{Datelike, Timelike};
use pdf_writer::{Content, Date, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

const MM_TO_PT: f64 = 72.0 / 25.4;
const PRODUCER: &str = "research-report";

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

/// Encode the document as PDF bytes
pub fn encode_pdf(document: &Document) -> Vec<u8> {
    let mut pdf = Pdf::new();

    // 1 catalog, 2 page tree, 3-4 fonts, 5 info, then (page, content) pairs
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);
    let info_id = Ref::new(5);
    let page_ids: Vec<(Ref, Ref)> = (0..document.pages.len() as i32)
        .map(|i| (Ref::new(6 + i * 2), Ref::new(7 + i * 2)))
        .collect();

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let media_box = Rect::new(0.0, 0.0, (PAGE_WIDTH * MM_TO_PT) as f32, (PAGE_HEIGHT * MM_TO_PT) as f32);
    for (page, (page_id, content_id)) in document.pages.iter().zip(&page_ids) {
        let mut writer = pdf.page(*page_id);
        writer.media_box(media_box);
        writer.parent(page_tree_id);
        writer.contents(*content_id);
        writer.resources().fonts().pair(REGULAR_FONT, regular_id).pair(BOLD_FONT, bold_id);
        writer.finish();

        let content = content_stream(&page.lines);
        pdf.stream(*content_id, &content);
    }

    let title = document.title.clone();
    let at = document.generated_at;
    let created = Date::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8);
    pdf.document_info(info_id)
        .title(TextStr(&title))
        .producer(TextStr(PRODUCER))
        .creation_date(created);

    pdf.finish()
}

/// Text-showing operators for one page
fn content_stream(lines: &[TextLine]) -> Vec<u8> {
    let mut content = Content::new();
    for line in lines {
        let font = if line.role.bold() { BOLD_FONT } else { REGULAR_FONT };
        let text = win_ansi_bytes(&line.text);
        content.begin_text();
        content.set_font(font, line.role.font_size() as f32);
        content.next_line((line.x * MM_TO_PT) as f32, ((PAGE_HEIGHT - line.y) * MM_TO_PT) as f32);
        content.show(Str(&text));
        content.end_text();
    }
    content.finish().to_vec()
}

/// Encode text in WinAnsi, the encoding both fonts declare.
/// Line breaks and tabs become spaces; characters outside WinAnsi become `?`.
pub fn win_ansi_bytes(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => b' ',
            _ if (' '..='~').contains(&c) => c as u8,
            _ => win_ansi_byte(c).unwrap_or(b'?'),
        })
        .collect()
}

/// WinAnsi code point for common non-ASCII characters
fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        '\u{2022}' => 0x95, // bullet
        '\u{2013}' => 0x96, // en dash
        '\u{2014}' => 0x97, // em dash
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2026}' => 0x85, // ellipsis
        '\u{20AC}' => 0x80, // euro
        '\u{2122}' => 0x99, // trademark
        // Latin-1 maps onto itself
        '\u{00A0}'..='\u{00FF}' => c as u32 as u8,
        _ => return None,
    };
    Some(byte)
}
