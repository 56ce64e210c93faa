//! Screen view export functions for JSON and Markdown formats.
//!
//! These write what the dashboard shows, not the paginated document: the
//! narrative keeps its block structure and the sentiment panel carries the
//! formatted percentages.

use super::blocks::TextBlock;
use super::screen::ScreenView;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export a screen view as JSON.
///
/// The view is wrapped with a generation timestamp so dumps taken at
/// different times can be told apart.
pub fn export_json_view(view: &ScreenView, output_path: &Path) -> io::Result<()> {
    use serde_json::json;

    let dump = json!({
        "generated": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        "view": view,
    });

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(file, &dump)?;

    Ok(())
}

/// Export a screen view as Markdown.
pub fn export_markdown_report(view: &ScreenView, output_path: &Path) -> io::Result<()> {
    let mut file = File::create(output_path)?;
    write_markdown(&mut file, view)
}

/// Render a screen view as a Markdown string
pub fn format_markdown_report(view: &ScreenView) -> io::Result<String> {
    let mut out = Vec::new();
    write_markdown(&mut out, view)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn write_markdown<W: Write>(w: &mut W, view: &ScreenView) -> io::Result<()> {
    writeln!(w, "# {}\n", view.title)?;
    writeln!(w, "_{}_\n", view.provenance)?;

    // Narrative headings are nested one level below the document title
    for block in &view.blocks {
        match block {
            TextBlock::Heading { level, text } => {
                writeln!(w, "{} {}\n", "#".repeat(*level as usize + 1), text)?;
            }
            TextBlock::BulletList { items } => {
                for item in items {
                    writeln!(w, "- {}", item)?;
                }
                writeln!(w)?;
            }
            TextBlock::Paragraph { text } => writeln!(w, "{}\n", text)?,
        }
    }

    if !view.metrics.is_empty() {
        writeln!(w, "## Metrics\n")?;
        for metric in &view.metrics {
            match &metric.description {
                Some(description) => writeln!(w, "- **{}**: {} ({})", metric.title, metric.value, description)?,
                None => writeln!(w, "- **{}**: {}", metric.title, metric.value)?,
            }
        }
        writeln!(w)?;
    }

    writeln!(w, "## Sentiment\n")?;
    if !view.sentiment.description.is_empty() {
        writeln!(w, "{}\n", view.sentiment.description)?;
    }
    writeln!(w, "| Polarity | Share | Count |")?;
    writeln!(w, "|----------|------:|------:|")?;
    for reading in &view.sentiment.readings {
        writeln!(w, "| {} | {} | {} |", reading.polarity.label(), reading.percent_display, reading.count_display)?;
    }
    writeln!(w)?;

    if !view.themes.is_empty() {
        writeln!(w, "## Key Themes\n")?;
        for badge in &view.themes {
            writeln!(w, "- {}", badge.text)?;
        }
        writeln!(w)?;
    }

    if !view.aspects.is_empty() {
        writeln!(w, "## Aspects\n")?;
        for card in &view.aspects {
            writeln!(w, "### {}\n", card.aspect)?;
            writeln!(w, "{}\n", card.summary)?;
            writeln!(
                w,
                "Positive: {} · Neutral: {} · Negative: {} · Total mentions: {}\n",
                card.positive, card.neutral, card.negative, card.total_mentions
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render_for_screen;
    use crate::test_fixtures::{empty_report, sample_report};
    use tempfile::TempDir;

    #[test]
    fn test_markdown_contains_every_panel() {
        let md = format_markdown_report(&render_for_screen(&sample_report())).unwrap();
        assert!(md.starts_with("# Research Report\n"));
        assert!(md.contains("_Based on 25 documents using similarity search_"));
        assert!(md.contains("## Metrics"));
        assert!(md.contains("| Positive | 60.0% | (120) |"));
        assert!(md.contains("- Customer support\n"));
        assert!(md.contains("### price\n"));
        assert!(md.contains("Neutral: n/a"));
    }

    #[test]
    fn test_markdown_nests_narrative_headings() {
        let md = format_markdown_report(&render_for_screen(&sample_report())).unwrap();
        assert!(md.contains("### Key Findings\n"));
        assert!(!md.contains("\n## Key Findings"));
    }

    #[test]
    fn test_markdown_for_empty_report_skips_empty_panels() {
        let md = format_markdown_report(&render_for_screen(&empty_report())).unwrap();
        assert!(md.contains("## Sentiment"));
        assert!(md.contains("| Positive | 0.0% |"));
        assert!(!md.contains("## Key Themes"));
        assert!(!md.contains("## Aspects"));
        assert!(!md.contains("## Metrics"));
    }

    /// Accepts a few bytes, then fails every write
    struct FullWriter {
        room: usize,
    }

    impl Write for FullWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.room == 0 {
                return Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"));
            }
            let n = buf.len().min(self.room);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_markdown_write_errors_propagate() {
        let view = render_for_screen(&sample_report());
        let err = write_markdown(&mut FullWriter { room: 64 }, &view).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::StorageFull);
    }

    #[test]
    fn test_export_json_view_writes_view() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("view.json");

        export_json_view(&render_for_screen(&sample_report()), &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["generated"].is_string());
        assert_eq!(value["view"]["title"], "Research Report");
        assert_eq!(value["view"]["themes"][0]["variant"], "primary");
        assert_eq!(value["view"]["blocks"][0]["kind"], "heading");
    }

    #[test]
    fn test_export_markdown_report_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.md");
        let view = render_for_screen(&sample_report());

        export_markdown_report(&view, &path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), format_markdown_report(&view).unwrap());
    }
}
