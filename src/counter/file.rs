use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::error::FileError;
use crate::language::Language;

use super::{DebugTrace, LineClassifier, LineObserver, TokenCounter, TokenTally};

/// Counts for one file, frozen once classification finishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub language: String,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
    pub tokens: usize,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_error"
    )]
    pub error: Option<FileError>,
}

impl FileRecord {
    /// A file that could not be opened: no language, zero counts.
    #[must_use]
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self {
            path: path.into(),
            error: Some(FileError::Unreadable(reason.to_string())),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn lines(&self) -> usize {
        self.code + self.comment + self.blank
    }
}

fn serialize_error<S: Serializer>(error: &Option<FileError>, serializer: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(error) => serializer.serialize_str(&error.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Builds [`FileRecord`]s, optionally counting tokens and tracing each line.
#[derive(Default, Clone, Copy)]
pub struct FileAnalyzer<'a> {
    tokens: Option<&'a dyn TokenCounter>,
    trace: bool,
}

impl<'a> FileAnalyzer<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tokens: None,
            trace: false,
        }
    }

    #[must_use]
    pub const fn with_tokens(mut self, counter: &'a dyn TokenCounter) -> Self {
        self.tokens = Some(counter);
        self
    }

    /// Print a per-line classification trace to stderr after each file.
    #[must_use]
    pub const fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    #[must_use]
    pub fn analyze_file(&self, path: &Path, language: &Language) -> FileRecord {
        self.analyze_file_with(path, language, ())
    }

    pub fn analyze_file_with<O: LineObserver>(
        &self,
        path: &Path,
        language: &Language,
        observer: O,
    ) -> FileRecord {
        match File::open(path) {
            Ok(file) => self.analyze_reader_with(path, language, BufReader::new(file), observer),
            Err(e) => FileRecord::unreadable(path, e),
        }
    }

    #[must_use]
    pub fn analyze_reader<R: BufRead>(&self, path: &Path, language: &Language, reader: R) -> FileRecord {
        self.analyze_reader_with(path, language, reader, ())
    }

    pub fn analyze_reader_with<R: BufRead, O: LineObserver>(
        &self,
        path: &Path,
        language: &Language,
        reader: R,
        observer: O,
    ) -> FileRecord {
        let mut tally = self.tokens.map(TokenTally::new);
        let mut trace = self
            .trace
            .then(|| DebugTrace::new(&format!("#{} ({})", path.display(), language.name)));

        let outcome = LineClassifier::new(&language.comment_syntax)
            .count_reader(reader, ((&mut tally, &mut trace), observer));

        if let Some(trace) = trace {
            eprint!("{}", trace.into_string());
        }

        FileRecord {
            path: path.to_path_buf(),
            language: language.name.clone(),
            code: outcome.stats.code,
            comment: outcome.stats.comment,
            blank: outcome.stats.blank,
            tokens: tally.map_or(0, |t| t.total()),
            error: outcome.error,
        }
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
