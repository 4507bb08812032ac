//! Colored error and warning lines on stderr.
//!
//! Format: `✖ Error: {message}` / `⚠ Warning: {message}` with an optional
//! `  × {detail}` line.

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        // Presence of NO_COLOR (any value) disables color.
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    pub fn print_error(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, message, detail);
    }

    pub fn print_warning(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail);
    }

    /// Writes an error line to `w`.
    pub fn write_error<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        self.write_line(w, "✖ Error:", ansi::RED, message, detail);
    }

    /// Writes a warning line to `w`.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        self.write_line(w, "⚠ Warning:", ansi::YELLOW, message, detail);
    }

    fn write_line<W: Write>(
        &self,
        w: &mut W,
        label: &str,
        color: &str,
        message: &str,
        detail: Option<&str>,
    ) {
        // Failing to write diagnostics to stderr is not itself reported.
        if self.use_colors {
            let _ = writeln!(w, "{}{color}{label}{} {message}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(w, "{label} {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }
    }
}
