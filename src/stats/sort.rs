use std::cmp::Ordering;

use crate::counter::FileRecord;
use crate::error::{Result, SlocCensusError};

use super::LanguageRecord;

/// Field a report is ordered by.
///
/// Every key except `Name` sorts descending; `Files`, `Blank`, `Comment`
/// and `Tokens` fall back to descending code on ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Name,
    Files,
    Blank,
    Comment,
    #[default]
    Code,
    Tokens,
}

impl SortKey {
    /// File rows have no file count to sort by.
    #[must_use]
    pub const fn applies_to_files(self) -> bool {
        !matches!(self, Self::Files)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Files => "files",
            Self::Blank => "blank",
            Self::Comment => "comment",
            Self::Code => "code",
            Self::Tokens => "tokens",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "files" => Ok(Self::Files),
            "blank" => Ok(Self::Blank),
            "comment" => Ok(Self::Comment),
            "code" => Ok(Self::Code),
            "tokens" => Ok(Self::Tokens),
            _ => Err(format!("Unknown sort key: {s}")),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Counts {
    files: usize,
    blank: usize,
    comment: usize,
    code: usize,
    tokens: usize,
}

trait Sortable {
    fn name_cmp(&self, other: &Self) -> Ordering;
    fn counts(&self) -> Counts;
}

impl Sortable for LanguageRecord {
    fn name_cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }

    fn counts(&self) -> Counts {
        Counts {
            files: self.files,
            blank: self.blank,
            comment: self.comment,
            code: self.code,
            tokens: self.tokens,
        }
    }
}

impl Sortable for FileRecord {
    fn name_cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }

    fn counts(&self) -> Counts {
        Counts {
            files: 1,
            blank: self.blank,
            comment: self.comment,
            code: self.code,
            tokens: self.tokens,
        }
    }
}

fn compare<T: Sortable>(key: SortKey, a: &T, b: &T) -> Ordering {
    if key == SortKey::Name {
        return a.name_cmp(b);
    }

    let (a, b) = (a.counts(), b.counts());
    let primary = match key {
        SortKey::Files => b.files.cmp(&a.files),
        SortKey::Blank => b.blank.cmp(&a.blank),
        SortKey::Comment => b.comment.cmp(&a.comment),
        SortKey::Tokens => b.tokens.cmp(&a.tokens),
        SortKey::Code | SortKey::Name => Ordering::Equal,
    };
    primary.then_with(|| b.code.cmp(&a.code))
}

/// Stable sort of language rows by `key`.
pub fn sort_languages(languages: &mut [LanguageRecord], key: SortKey) {
    languages.sort_by(|a, b| compare(key, a, b));
}

/// Stable sort of file rows by `key`.
///
/// # Errors
/// Returns an error for [`SortKey::Files`], which has no meaning per file.
pub fn sort_files(files: &mut [FileRecord], key: SortKey) -> Result<()> {
    if !key.applies_to_files() {
        return Err(SlocCensusError::Config(format!(
            "cannot sort files by '{key}'"
        )));
    }
    files.sort_by(|a, b| compare(key, a, b));
    Ok(())
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
