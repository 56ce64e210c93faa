//! Copying the report narrative.
//!
//! The copy action hands over the raw narrative string exactly as received,
//! never the parsed blocks or any rendered form.

use crate::types::Report;
use std::io::{self, Write};

/// Destination for copied text
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Writes copied text to any writer; the CLI uses stdout so the text can be
/// piped into a platform clipboard tool.
pub struct WriterClipboard<W: Write> {
    writer: W,
}

impl<W: Write> WriterClipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterClipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Clipboard for WriterClipboard<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()
    }
}

/// Copy the report's narrative to the clipboard
pub fn copy_report<C: Clipboard + ?Sized>(report: &Report, clipboard: &mut C) -> io::Result<()> {
    clipboard.write_text(&report.report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::sample_report;

    #[test]
    fn test_copy_passes_raw_narrative() {
        let report = sample_report();
        let mut clipboard = WriterClipboard::new(Vec::new());

        copy_report(&report, &mut clipboard).unwrap();

        let copied = String::from_utf8(clipboard.into_inner()).unwrap();
        assert_eq!(copied, report.report);
        assert!(copied.starts_with("# Wireless Earbuds"));
        assert!(copied.contains("\n\n- Battery life"));
    }
}
