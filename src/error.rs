use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlocCensusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regular expression: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to load tokenizer: {0}")]
    Tokenizer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlocCensusError>;

/// Per-file failure. Recorded on the file's record, never fatal to a run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    #[error("unreadable: {0}")]
    Unreadable(String),

    #[error("line {line} exceeds the maximum line length of {max} bytes")]
    LineTooLong { line: usize, max: usize },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
