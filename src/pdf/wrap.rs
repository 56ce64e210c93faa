//! Text measurement and wrapping for the exported document.
//!
//! Widths are measured with the standard Helvetica metrics (1/1000 em) and
//! converted to millimetres at the given font size, so a 170 mm column wraps
//! the same way on every machine.

use unicode_width::UnicodeWidthChar;

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Advance widths for printable ASCII (0x20..=0x7E), Helvetica regular
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0' .. '9'
    278, 278, 584, 584, 584, 556, 1015, // ':' .. '@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A' .. 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N' .. 'Z'
    278, 278, 278, 469, 556, 333, // '[' .. '`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a' .. 'm'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n' .. 'z'
    334, 260, 334, 584, // '{' .. '~'
];

/// Fallback advance for characters outside the table, per display column
const FALLBACK_WIDTH: u16 = 556;

/// Measures strings in millimetres for one font size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMeasure {
    pub font_size: f64,
}

impl TextMeasure {
    pub fn new(font_size: f64) -> Self {
        Self { font_size }
    }

    /// Width of a single character in millimetres
    pub fn char_width(&self, c: char) -> f64 {
        let units = match c as u32 {
            0x20..=0x7E => HELVETICA_WIDTHS[(c as u32 - 0x20) as usize] as f64,
            _ => {
                let columns = UnicodeWidthChar::width(c).unwrap_or(0) as f64;
                FALLBACK_WIDTH as f64 * columns
            }
        };
        units / 1000.0 * self.font_size * PT_TO_MM
    }

    /// Width of a string in millimetres
    pub fn width(&self, s: &str) -> f64 {
        s.chars().map(|c| self.char_width(c)).sum()
    }

    /// Split text into lines no wider than `max_width` millimetres.
    ///
    /// Explicit newlines are kept as line breaks (blank lines survive as
    /// empty strings). Words are packed greedily; a single word wider than
    /// the column is broken between characters.
    pub fn split_text_to_size(&self, text: &str, max_width: f64) -> Vec<String> {
        let mut lines = Vec::new();
        for source_line in text.split('\n') {
            self.wrap_line(source_line.trim_end_matches('\r'), max_width, &mut lines);
        }
        lines
    }

    fn wrap_line(&self, line: &str, max_width: f64, out: &mut Vec<String>) {
        let space = self.char_width(' ');
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in line.split_whitespace() {
            let word_width = self.width(word);

            if !current.is_empty() && current_width + space + word_width <= max_width {
                current.push(' ');
                current.push_str(word);
                current_width += space + word_width;
                continue;
            }

            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
                current_width = 0.0;
            }

            if word_width <= max_width {
                current.push_str(word);
                current_width = word_width;
            } else {
                for piece in self.break_word(word, max_width) {
                    if !current.is_empty() {
                        out.push(std::mem::take(&mut current));
                    }
                    current_width = self.width(&piece);
                    current = piece;
                }
            }
        }

        out.push(current);
    }

    /// Hard-break a word that does not fit on a line by itself
    fn break_word(&self, word: &str, max_width: f64) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut piece = String::new();
        let mut width = 0.0;

        for c in word.chars() {
            let w = self.char_width(c);
            if !piece.is_empty() && width + w > max_width {
                pieces.push(std::mem::take(&mut piece));
                width = 0.0;
            }
            piece.push(c);
            width += w;
        }
        if !piece.is_empty() {
            pieces.push(piece);
        }
        pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEASURE: TextMeasure = TextMeasure { font_size: 11.0 };

    #[test]
    fn test_width_table_covers_printable_ascii() {
        assert_eq!(HELVETICA_WIDTHS.len(), ('~' as usize) - (' ' as usize) + 1);
        assert!(MEASURE.char_width('W') > MEASURE.char_width('i'));
        assert!((MEASURE.char_width('0') - MEASURE.char_width('9')).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(MEASURE.split_text_to_size("Battery life is good", 170.0), vec!["Battery life is good"]);
    }

    #[test]
    fn test_lines_respect_max_width() {
        let text = "word ".repeat(200);
        let lines = MEASURE.split_text_to_size(&text, 170.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(MEASURE.width(line) <= 170.0, "line too wide: {}", line);
        }
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
        assert_eq!(rejoined.len(), 200);
    }

    #[test]
    fn test_newlines_are_preserved() {
        let lines = MEASURE.split_text_to_size("# Title\n\nBody", 170.0);
        assert_eq!(lines, vec!["# Title", "", "Body"]);
    }

    #[test]
    fn test_overlong_word_is_broken() {
        let word = "x".repeat(300);
        let lines = MEASURE.split_text_to_size(&word, 50.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), word);
        for line in &lines {
            assert!(MEASURE.width(line) <= 50.0);
        }
    }

    #[test]
    fn test_wide_characters_use_display_columns() {
        assert!((MEASURE.char_width('界') - 2.0 * MEASURE.char_width('0')).abs() < 1e-9);
    }
}
