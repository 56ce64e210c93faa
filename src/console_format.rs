/// Console formatting module - Pure rendering concerns
///
/// This module draws a `ScreenView` as terminal text:
/// - Headings, bullet lists and paragraphs wrapped to the console width
/// - The sentiment panel as three aligned columns
/// - Theme badges coloured by their variant
/// - Aspect and metric cards
///
/// It accepts the display structure from the report module and never looks
/// at the raw report.
///
/// ## Output Flexibility
///
/// `ScreenWriter` writes to any `std::io::Write` destination, so the same code
/// serves stdout and test buffers. Colour goes through a terminfo terminal;
/// when no terminfo entry is found the output stays plain.

use crate::report::{AspectCard, BadgeVariant, MetricCard, Polarity, ScreenView, SentimentPanel, TextBlock, ThemeBadge};
use std::io::{self, Write};
use std::sync::OnceLock;
use term::Terminal;
use term::color::Color;
use term::terminfo::{TermInfo, TerminfoTerminal};
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Narrowest width the layout degrades to
const MIN_WIDTH: usize = 40;
/// Fallback when no terminal is attached
const DEFAULT_WIDTH: usize = 100;
/// Width of one sentiment column
const READING_WIDTH: usize = 16;

/// Destination of a `ScreenWriter`
enum Output<W: Write> {
    Plain(W),
    Styled(TerminfoTerminal<W>),
}

impl<W: Write> Output<W> {
    fn into_inner(self) -> W {
        match self {
            Output::Plain(w) => w,
            Output::Styled(t) => t.into_inner(),
        }
    }
}

impl<W: Write> Write for Output<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Plain(w) => w.write(buf),
            Output::Styled(t) => t.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Plain(w) => w.flush(),
            Output::Styled(t) => t.flush(),
        }
    }
}

/// Writer for screen output - configurable for color/plain text
pub struct ScreenWriter<W: Write> {
    writer: Output<W>,
    width: usize,
}

impl<W: Write> ScreenWriter<W> {
    /// Create a writer using the configured console width
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self::with_width(writer, use_colors, console_width())
    }

    /// Colours use the terminfo entry named by `TERM`
    pub fn with_width(writer: W, use_colors: bool, width: usize) -> Self {
        if use_colors && let Ok(info) = TermInfo::from_env() {
            return Self::with_terminfo(writer, info, width);
        }
        Self { writer: Output::Plain(writer), width: width.max(MIN_WIDTH) }
    }

    /// Colour output through an explicit terminfo entry
    pub fn with_terminfo(writer: W, info: TermInfo, width: usize) -> Self {
        let terminal = TerminfoTerminal::new_with_terminfo(writer, info);
        Self { writer: Output::Styled(terminal), width: width.max(MIN_WIDTH) }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Write text, in colour when the terminal supports it
    fn write_colored(&mut self, text: &str, color: Color, bold: bool) -> io::Result<()> {
        if let Output::Styled(ref mut terminal) = self.writer
            && terminal.supports_color()
        {
            terminal.fg(color).map_err(io::Error::from)?;
            if bold && terminal.supports_attr(term::Attr::Bold) {
                terminal.attr(term::Attr::Bold).map_err(io::Error::from)?;
            }
            write!(terminal, "{}", text)?;
            return terminal.reset().map_err(io::Error::from);
        }
        write!(self.writer, "{}", text)
    }

    fn writeln(&mut self) -> io::Result<()> {
        writeln!(self.writer)
    }

    fn write_rule(&mut self, ch: char, len: usize) -> io::Result<()> {
        writeln!(self.writer, "{}", ch.to_string().repeat(len))
    }

    fn write_section_title(&mut self, title: &str) -> io::Result<()> {
        self.writeln()?;
        self.write_colored(title, term::color::BRIGHT_CYAN, true)?;
        self.writeln()?;
        self.write_rule('─', display_width(title))
    }

    /// Write the whole view, top to bottom
    pub fn write_view(&mut self, view: &ScreenView) -> io::Result<()> {
        self.write_header(&view.title, &view.provenance)?;
        for block in &view.blocks {
            self.write_block(block)?;
        }
        if !view.metrics.is_empty() {
            self.write_metrics(&view.metrics)?;
        }
        self.write_sentiment(&view.sentiment)?;
        if !view.themes.is_empty() {
            self.write_themes(&view.themes)?;
        }
        if !view.aspects.is_empty() {
            self.write_aspects(&view.aspects)?;
        }
        self.writer.flush()
    }

    pub fn write_header(&mut self, title: &str, provenance: &str) -> io::Result<()> {
        self.write_colored(title, term::color::BRIGHT_WHITE, true)?;
        self.writeln()?;
        self.write_colored(provenance, term::color::BRIGHT_BLACK, false)?;
        self.writeln()?;
        self.write_rule('━', self.width)
    }

    pub fn write_block(&mut self, block: &TextBlock) -> io::Result<()> {
        self.writeln()?;
        match block {
            TextBlock::Heading { level, text } => {
                self.write_colored(text, term::color::BRIGHT_WHITE, true)?;
                self.writeln()?;
                let underline = if *level == 1 { '═' } else { '─' };
                self.write_rule(underline, display_width(text).min(self.width))
            }
            TextBlock::BulletList { items } => {
                for item in items {
                    let lines = wrap_text(item, self.width - 4);
                    for (i, line) in lines.iter().enumerate() {
                        let marker = if i == 0 { "  • " } else { "    " };
                        writeln!(self.writer, "{}{}", marker, line)?;
                    }
                }
                Ok(())
            }
            TextBlock::Paragraph { text } => {
                for line in wrap_text(text, self.width) {
                    writeln!(self.writer, "{}", line)?;
                }
                Ok(())
            }
        }
    }

    pub fn write_metrics(&mut self, metrics: &[MetricCard]) -> io::Result<()> {
        self.write_section_title("Metrics")?;
        let title_width = metrics.iter().map(|m| display_width(&m.title)).max().unwrap_or(0).min(self.width / 2);

        for metric in metrics {
            write!(self.writer, "  {}  ", truncate_with_padding(&metric.title, title_width))?;
            self.write_colored(&metric.value, term::color::BRIGHT_WHITE, true)?;
            self.writeln()?;
            if let Some(ref description) = metric.description {
                for line in wrap_text(description, self.width.saturating_sub(title_width + 4).max(MIN_WIDTH / 2)) {
                    writeln!(self.writer, "  {:indent$}  {}", "", line, indent = title_width)?;
                }
            }
        }
        Ok(())
    }

    pub fn write_sentiment(&mut self, panel: &SentimentPanel) -> io::Result<()> {
        self.write_section_title("Sentiment")?;
        if !panel.description.is_empty() {
            for line in wrap_text(&panel.description, self.width) {
                writeln!(self.writer, "{}", line)?;
            }
        }

        write!(self.writer, "  ")?;
        for reading in &panel.readings {
            let label = truncate_with_padding(reading.polarity.label(), READING_WIDTH);
            self.write_colored(&label, polarity_color(reading.polarity), true)?;
        }
        self.writeln()?;

        write!(self.writer, "  ")?;
        for reading in &panel.readings {
            write!(self.writer, "{}", truncate_with_padding(&reading.percent_display, READING_WIDTH))?;
        }
        self.writeln()?;

        write!(self.writer, "  ")?;
        for reading in &panel.readings {
            write!(self.writer, "{}", truncate_with_padding(&reading.count_display, READING_WIDTH))?;
        }
        self.writeln()
    }

    /// Badges flow left to right and wrap at the console width
    pub fn write_themes(&mut self, themes: &[ThemeBadge]) -> io::Result<()> {
        self.write_section_title("Key Themes")?;
        let mut line_width = 0;
        for badge in themes {
            let text = format!("[{}]", truncate_badge(&badge.text, self.width - 2));
            let w = display_width(&text);
            if line_width > 0 && line_width + 1 + w > self.width {
                self.writeln()?;
                line_width = 0;
            }
            if line_width > 0 {
                write!(self.writer, " ")?;
                line_width += 1;
            }
            self.write_colored(&text, badge_color(badge.variant), false)?;
            line_width += w;
        }
        self.writeln()
    }

    pub fn write_aspects(&mut self, aspects: &[AspectCard]) -> io::Result<()> {
        self.write_section_title("Aspects")?;
        for card in aspects {
            self.write_aspect_card(card)?;
        }
        Ok(())
    }

    fn write_aspect_card(&mut self, card: &AspectCard) -> io::Result<()> {
        let inner = self.width - 4;
        let mentions = format!("{} mentions", card.total_mentions);
        let name_width = inner.saturating_sub(display_width(&mentions) + 1);

        writeln!(self.writer, "╭{:─<width$}╮", "", width = inner + 2)?;
        write!(self.writer, "│ ")?;
        self.write_colored(&truncate_with_padding(&card.aspect, name_width), term::color::BRIGHT_WHITE, true)?;
        writeln!(self.writer, " {} │", mentions)?;

        for line in wrap_text(&card.summary, inner) {
            writeln!(self.writer, "│ {} │", truncate_with_padding(&line, inner))?;
        }

        let counts = [
            (Polarity::Positive, &card.positive),
            (Polarity::Neutral, &card.neutral),
            (Polarity::Negative, &card.negative),
        ];
        write!(self.writer, "│ ")?;
        let mut used = 0;
        for (polarity, count) in counts {
            let cell = truncate_with_padding(&format!("{}: {}", polarity.label(), count), READING_WIDTH);
            if used + READING_WIDTH > inner {
                break;
            }
            self.write_colored(&cell, polarity_color(polarity), false)?;
            used += READING_WIDTH;
        }
        writeln!(self.writer, "{} │", " ".repeat(inner - used))?;
        writeln!(self.writer, "╰{:─<width$}╯", "", width = inner + 2)
    }
}

/// Draw a view to stdout
pub fn print_screen_view(view: &ScreenView, use_colors: bool) -> io::Result<()> {
    let mut writer = ScreenWriter::new(io::stdout().lock(), use_colors);
    writer.write_view(view)
}

//
// Colours
//

pub fn badge_color(variant: BadgeVariant) -> Color {
    match variant {
        BadgeVariant::Primary => term::color::BLUE,
        BadgeVariant::Secondary => term::color::MAGENTA,
        BadgeVariant::Success => term::color::GREEN,
        BadgeVariant::Warning => term::color::YELLOW,
        BadgeVariant::Error => term::color::RED,
        BadgeVariant::Default => term::color::WHITE,
    }
}

pub fn polarity_color(polarity: Polarity) -> Color {
    match polarity {
        Polarity::Positive => term::color::BRIGHT_GREEN,
        Polarity::Neutral => term::color::BRIGHT_YELLOW,
        Polarity::Negative => term::color::BRIGHT_RED,
    }
}

//
// Console Width
//

/// Get terminal width or the default
fn get_terminal_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() { w as usize } else { DEFAULT_WIDTH }
}

static CONSOLE_WIDTH: OnceLock<usize> = OnceLock::new();

/// Fix the console width instead of asking the terminal
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH.set(width); // Ignore error if already initialized
}

/// Console width (with fallback to the terminal if not set)
pub fn console_width() -> usize {
    *CONSOLE_WIDTH.get_or_init(get_terminal_width)
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate and pad string to exact width
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w > width {
        let mut result = String::new();
        let mut current_width = 0;

        // Reserve space for "..."
        let target_width = if width >= 3 { width - 3 } else { width };

        for c in s.chars() {
            let c_width = UnicodeWidthChar::width(c).unwrap_or(1);

            if current_width + c_width > target_width {
                break;
            }

            result.push(c);
            current_width += c_width;
        }

        if width >= 3 {
            result.push_str("...");
            current_width += 3;
        }

        if current_width < width {
            result.push_str(&" ".repeat(width - current_width));
        }

        result
    } else {
        let padding = width - display_w;
        format!("{}{}", s, " ".repeat(padding))
    }
}

/// Shorten a badge label without padding it
fn truncate_badge(s: &str, width: usize) -> String {
    if display_width(s) > width { truncate_with_padding(s, width).trim_end().to_string() } else { s.to_string() }
}

/// Greedy word wrap by display width.
///
/// Existing line breaks are kept. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for source_line in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0;

        for word in source_line.split_whitespace() {
            let word_width = display_width(word);

            if current_width > 0 && current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
                continue;
            }

            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            if word_width <= width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for c in word.chars() {
                    let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
                    if current_width + c_width > width && current_width > 0 {
                        lines.push(std::mem::take(&mut current));
                        current_width = 0;
                    }
                    current.push(c);
                    current_width += c_width;
                }
            }
        }

        lines.push(current);
    }

    lines
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
