mod error_output;
mod json;
mod languages;
mod path;
mod progress;
mod sloccount;
mod text;
mod xml;

#[cfg(test)]
mod test_fixtures;

pub use error_output::ErrorOutput;
pub use json::JsonFormatter;
pub use languages::format_language_list;
pub use path::display_path;
pub use progress::ScanProgress;
pub use sloccount::SloccountFormatter;
pub use text::{ColorMode, TextFormatter};
pub use xml::ClocXmlFormatter;

use crate::counter::FileRecord;
use crate::error::Result;
use crate::stats::{AnalysisResult, LanguageRecord, SortKey, sort_files, sort_languages};

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// A sorted, presentation-ready view of an [`AnalysisResult`].
#[derive(Debug, Clone)]
pub struct Report<'r> {
    pub result: &'r AnalysisResult,
    /// One row per file instead of one per language.
    pub by_file: bool,
    pub sort: SortKey,
    pub show_tokens: bool,
    /// Language rows in report order.
    pub languages: Vec<LanguageRecord>,
    /// Counted file rows in report order; files without a language are left out.
    pub files: Vec<FileRecord>,
}

impl<'r> Report<'r> {
    /// Sort the rows of `result` for presentation.
    ///
    /// # Errors
    /// Returns an error when `by_file` is combined with a sort key that has
    /// no per-file meaning.
    pub fn new(
        result: &'r AnalysisResult,
        by_file: bool,
        sort: SortKey,
        show_tokens: bool,
    ) -> Result<Self> {
        let mut languages = result.languages.clone();
        sort_languages(&mut languages, sort);

        let mut files: Vec<FileRecord> = result
            .files
            .iter()
            .filter(|f| !f.language.is_empty())
            .cloned()
            .collect();
        if by_file {
            sort_files(&mut files, sort)?;
        } else {
            files.sort_by(|a, b| a.path.cmp(&b.path));
        }

        Ok(Self {
            result,
            by_file,
            sort,
            show_tokens,
            languages,
            files,
        })
    }

    #[must_use]
    pub const fn total(&self) -> &LanguageRecord {
        &self.result.total
    }
}

/// Renders a [`Report`] in one output format.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report<'_>) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    ClocXml,
    Sloccount,
    Json,
}

impl OutputFormat {
    /// The formatter for this format.
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(TextFormatter::new(color)),
            Self::ClocXml => Box::new(ClocXmlFormatter),
            Self::Sloccount => Box::new(SloccountFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "default" => Ok(Self::Text),
            "cloc-xml" | "xml" => Ok(Self::ClocXml),
            "sloccount" => Ok(Self::Sloccount),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
