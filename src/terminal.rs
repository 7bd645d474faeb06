//! Terminal output of highlighted text using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{Color, Style, StyledRun, Theme};

/// Writes styled runs to any output stream
pub struct Terminal<W: Write> {
    out: W,
    /// Whether to emit color and attribute sequences
    color: bool,
    /// Whether to prefix each line with its number
    line_numbers: bool,
}

impl<W: Write> Terminal<W> {
    /// Create a new terminal writer
    pub fn new(out: W, color: bool, line_numbers: bool) -> Self {
        Self {
            out,
            color,
            line_numbers,
        }
    }

    /// Width of the line number gutter (including separator)
    fn gutter_width(line_count: usize) -> usize {
        let digits = line_count.max(1).to_string().len();
        digits.max(3) + 1 // minimum 3 digits + space
    }

    /// Write highlighted lines, separated by newlines
    pub fn write_lines(&mut self, lines: &[Vec<StyledRun<'_>>], theme: &Theme) -> Result<()> {
        let gutter = Self::gutter_width(lines.len());

        for (idx, runs) in lines.iter().enumerate() {
            if idx > 0 {
                self.write_str("\n")?;
            }
            if self.line_numbers {
                self.write_line_number(idx + 1, gutter)?;
            }
            self.write_runs(runs, theme)?;
        }
        self.flush()
    }

    /// Write one line's runs
    pub fn write_runs(&mut self, runs: &[StyledRun<'_>], theme: &Theme) -> Result<()> {
        for run in runs {
            match run.style(theme) {
                Some(style) if self.color && !style.is_default() => {
                    self.apply_style(&style)?;
                    self.write_str(run.text)?;
                    self.reset_attributes()?;
                }
                _ => self.write_str(run.text)?,
            }
        }
        Ok(())
    }

    fn write_line_number(&mut self, number: usize, width: usize) -> Result<()> {
        let label = format!("{:>w$} ", number, w = width - 1);
        if self.color {
            self.set_dim()?;
            self.write_str(&label)?;
            self.reset_attributes()
        } else {
            self.write_str(&label)
        }
    }

    /// Write a string at the current position
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        queue!(self.out, Print(s))?;
        Ok(())
    }

    /// Apply a style (foreground, bold, italic)
    pub fn apply_style(&mut self, style: &Style) -> Result<()> {
        if let Some(color) = to_crossterm(style.fg) {
            queue!(self.out, SetForegroundColor(color))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        Ok(())
    }

    /// Set dim/faint mode (for line numbers); cleared by `reset_attributes`
    pub fn set_dim(&mut self) -> Result<()> {
        queue!(self.out, SetAttribute(Attribute::Dim))?;
        Ok(())
    }

    /// Reset all attributes
    pub fn reset_attributes(&mut self) -> Result<()> {
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        Ok(())
    }

    /// Flush output buffer
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consume the terminal and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn to_crossterm(color: Color) -> Option<style::Color> {
    match color {
        Color::Default => None,
        Color::Rgb { r, g, b } => Some(style::Color::Rgb { r, g, b }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{highlight_lines, LanguageId};

    fn render(text: &str, color: bool, line_numbers: bool) -> String {
        let lines = highlight_lines(text, LanguageId::Kotlin);
        let mut term = Terminal::new(Vec::new(), color, line_numbers);
        term.write_lines(&lines, &Theme::default()).unwrap();
        String::from_utf8(term.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_output_is_input() {
        let text = "fun main() {\n    println(\"hi\")\n}\n";
        assert_eq!(render(text, false, false), text);
    }

    #[test]
    fn test_colored_output() {
        let out = render("val x = 1", true, false);
        // keyword #569CD6 as 24-bit foreground
        assert!(out.contains("\x1b[38;2;86;156;214m"));
        assert!(out.contains("val"));
        assert!(out.contains('\x1b'));
        assert!(out.ends_with("m"));
    }

    #[test]
    fn test_plain_text_has_no_escapes() {
        let out = render("x + y", true, false);
        assert_eq!(out, "x + y");
    }

    #[test]
    fn test_line_numbers() {
        let out = render("a\nb", false, true);
        assert_eq!(out, "  1 a\n  2 b");
    }

    #[test]
    fn test_line_numbers_are_dim() {
        let out = render("a", true, true);
        assert!(out.starts_with("\x1b[2m  1 "));
        assert!(out.ends_with("a"));
    }

    #[test]
    fn test_gutter_width() {
        assert_eq!(Terminal::<Vec<u8>>::gutter_width(0), 4);
        assert_eq!(Terminal::<Vec<u8>>::gutter_width(999), 4);
        assert_eq!(Terminal::<Vec<u8>>::gutter_width(1000), 5);
    }
}
