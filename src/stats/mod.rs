//! Folding [`FileRecord`]s into per-language and grand totals.

mod sort;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::counter::FileRecord;

pub use sort::{SortKey, sort_files, sort_languages};

/// Name of the grand-total row.
pub const TOTAL_NAME: &str = "TOTAL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageRecord {
    pub name: String,
    pub files: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
    pub tokens: usize,
}

impl LanguageRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn lines(&self) -> usize {
        self.code + self.comment + self.blank
    }

    fn add_file(&mut self, record: &FileRecord) {
        self.files += 1;
        self.code += record.code;
        self.comment += record.comment;
        self.blank += record.blank;
        self.tokens += record.tokens;
    }

    fn absorb(&mut self, other: &Self) {
        self.files += other.files;
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
        self.tokens += other.tokens;
    }
}

/// Everything a run produced, independent of the order files were analyzed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Every analyzed file, sorted by path.
    pub files: Vec<FileRecord>,
    /// One record per language, sorted by name.
    pub languages: Vec<LanguageRecord>,
    pub total: LanguageRecord,
    /// Files whose language could not be determined, sorted.
    pub skipped: Vec<PathBuf>,
}

impl AnalysisResult {
    /// Files that carry a per-file error.
    pub fn errors(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().filter(|f| f.error.is_some())
    }
}

/// Commutative fold over file records.
///
/// Aggregators built on different threads can be combined with
/// [`Aggregator::merge`]; [`Aggregator::finish`] yields the same result for
/// any arrival order.
#[derive(Debug, Default)]
pub struct Aggregator {
    files: Vec<FileRecord>,
    languages: BTreeMap<String, LanguageRecord>,
    skipped: Vec<PathBuf>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record in. A record without a language (unreadable before
    /// resolution) is kept in the file list only.
    pub fn add(&mut self, record: FileRecord) {
        if !record.language.is_empty() {
            self.languages
                .entry(record.language.clone())
                .or_insert_with(|| LanguageRecord::new(record.language.clone()))
                .add_file(&record);
        }
        self.files.push(record);
    }

    /// Record a file whose language could not be determined.
    pub fn skip(&mut self, path: PathBuf) {
        self.skipped.push(path);
    }

    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.files.extend(other.files);
        self.skipped.extend(other.skipped);
        for (name, record) in other.languages {
            self.languages
                .entry(name)
                .and_modify(|existing| existing.absorb(&record))
                .or_insert(record);
        }
        self
    }

    #[must_use]
    pub fn finish(mut self) -> AnalysisResult {
        self.files.sort_by(|a, b| a.path.cmp(&b.path));
        self.skipped.sort();

        let mut total = LanguageRecord::new(TOTAL_NAME);
        for record in self.languages.values() {
            total.absorb(record);
        }

        AnalysisResult {
            files: self.files,
            languages: self.languages.into_values().collect(),
            total,
            skipped: self.skipped,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
