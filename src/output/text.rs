use std::fmt::Write;

use crate::error::Result;
use crate::stats::LanguageRecord;

use super::{Report, ReportFormatter, ansi, display_path};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

const LANGUAGE_HEADER: &str = "Language";
const FILE_HEADER: &str = "File";
const COUNT_HEADER: &str = "files          blank        comment           code";
const TOKEN_HEADER: &str = "         tokens";
const LANGUAGE_WIDTH: usize = 27;

/// Fixed-width table in the style of cloc.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_header(&self, out: &mut String, title: &str, width: usize, report: &Report<'_>) {
        let mut header = COUNT_HEADER.to_string();
        if report.show_tokens {
            header.push_str(TOKEN_HEADER);
        }
        let separator = "-".repeat(width + header.len() + 2);

        let _ = writeln!(out, "{separator}");
        let line = format!("{title:<w$} {header}", w = width + 1);
        let _ = writeln!(out, "{}", self.paint(&line, ansi::CYAN));
        let _ = writeln!(out, "{separator}");
    }

    fn write_footer(&self, out: &mut String, width: usize, report: &Report<'_>) {
        let total = report.total();
        let extra = if report.show_tokens { TOKEN_HEADER.len() } else { 0 };
        let separator = "-".repeat(width + COUNT_HEADER.len() + extra + 2);

        let _ = writeln!(out, "{separator}");
        let mut line = format!(
            "{:<width$} {:>6} {:>14} {:>14} {:>14}",
            "TOTAL", total.files, total.blank, total.comment, total.code
        );
        if report.show_tokens {
            let _ = write!(line, " {:>14}", total.tokens);
        }
        let _ = writeln!(out, "{}", self.paint(&line, ansi::GREEN));
        let _ = writeln!(out, "{separator}");
    }

    fn language_row(record: &LanguageRecord, show_tokens: bool) -> String {
        let mut line = format!(
            "{:<w$} {:>6} {:>14} {:>14} {:>14}",
            record.name,
            record.files,
            record.blank,
            record.comment,
            record.code,
            w = LANGUAGE_WIDTH
        );
        if show_tokens {
            let _ = write!(line, " {:>14}", record.tokens);
        }
        line
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let mut out = String::new();

        if report.by_file {
            let names: Vec<String> = report.files.iter().map(|f| display_path(&f.path)).collect();
            let width = names
                .iter()
                .map(|n| n.chars().count())
                .max()
                .unwrap_or(0)
                .max("TOTAL".len());

            self.write_header(&mut out, FILE_HEADER, width, report);
            for (file, name) in report.files.iter().zip(&names) {
                let _ = write!(
                    out,
                    "{name:<width$} {:>21} {:>14} {:>14}",
                    file.blank, file.comment, file.code
                );
                if report.show_tokens {
                    let _ = write!(out, " {:>14}", file.tokens);
                }
                out.push('\n');
            }
            self.write_footer(&mut out, width, report);
        } else {
            self.write_header(&mut out, LANGUAGE_HEADER, LANGUAGE_WIDTH, report);
            for record in &report.languages {
                let _ = writeln!(out, "{}", Self::language_row(record, report.show_tokens));
            }
            self.write_footer(&mut out, LANGUAGE_WIDTH, report);
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
