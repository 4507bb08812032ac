use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;

use crate::error::{Result, SlocCensusError};
use crate::language::file_extension;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;

    /// Whether the walker descends into `dir`. Defaults to every directory.
    fn should_enter(&self, _dir: &Path) -> bool {
        true
    }
}

/// Patterns selecting which files take part in a census.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Extensions (without the dot) whose files are dropped.
    pub exclude_ext: Vec<String>,
    /// Glob patterns matched against the whole path.
    pub exclude: Vec<String>,
    /// Regex a file name must match.
    pub match_file: Option<String>,
    /// Regex a file name must not match.
    pub not_match_file: Option<String>,
    /// Regex the parent directory path must match.
    pub match_dir: Option<String>,
    /// Regex a directory name must not match; matching directories are pruned.
    pub not_match_dir: Option<String>,
}

pub struct CensusFilter {
    exclude_ext: Vec<String>,
    exclude_patterns: GlobSet,
    match_file: Option<Regex>,
    not_match_file: Option<Regex>,
    match_dir: Option<Regex>,
    not_match_dir: Option<Regex>,
}

impl CensusFilter {
    /// Compile every pattern in `options`.
    ///
    /// # Errors
    /// Returns an error if any glob or regex is invalid.
    pub fn new(options: &FilterOptions) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &options.exclude {
            let glob = Glob::new(pattern).map_err(|e| SlocCensusError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| SlocCensusError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            exclude_ext: options.exclude_ext.clone(),
            exclude_patterns,
            match_file: compile(options.match_file.as_deref())?,
            not_match_file: compile(options.not_match_file.as_deref())?,
            match_dir: compile(options.match_dir.as_deref())?,
            not_match_dir: compile(options.not_match_dir.as_deref())?,
        })
    }

    fn has_excluded_extension(&self, file_name: &str) -> bool {
        file_extension(file_name).is_some_and(|ext| self.exclude_ext.iter().any(|e| e == ext))
    }

    fn matches_file_name(&self, file_name: &str) -> bool {
        if let Some(re) = &self.match_file
            && !re.is_match(file_name)
        {
            return false;
        }
        if let Some(re) = &self.not_match_file
            && re.is_match(file_name)
        {
            return false;
        }
        true
    }

    fn matches_dir(&self, path: &Path) -> bool {
        let Some(re) = &self.match_dir else {
            return true;
        };
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        re.is_match(&parent.to_string_lossy())
    }
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| {
            Regex::new(p).map_err(|e| SlocCensusError::InvalidRegex {
                pattern: p.to_string(),
                source: e,
            })
        })
        .transpose()
}

impl FileFilter for CensusFilter {
    fn should_include(&self, path: &Path) -> bool {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        !self.has_excluded_extension(&file_name)
            && self.matches_file_name(&file_name)
            && self.matches_dir(path)
            && !self.exclude_patterns.is_match(path)
    }

    fn should_enter(&self, dir: &Path) -> bool {
        let Some(re) = &self.not_match_dir else {
            return true;
        };
        dir.file_name()
            .is_none_or(|name| !re.is_match(&name.to_string_lossy()))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
