use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Contents of `.sloc-census.toml`. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub count: CountConfig,

    #[serde(default)]
    pub output: OutputConfig,

    /// Extra or overriding language grammars, keyed by language name.
    #[serde(default)]
    pub languages: IndexMap<String, CustomLanguageConfig>,
}

/// How files are discovered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// Glob patterns of paths to leave out.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct CountConfig {
    #[serde(default)]
    pub skip_duplicated: bool,

    /// Count files of unknown language under `Unknown` instead of skipping them.
    #[serde(default)]
    pub count_unknown: bool,

    #[serde(default)]
    pub tokens: bool,

    #[serde(default)]
    pub include_languages: Vec<String>,

    #[serde(default)]
    pub exclude_extensions: Vec<String>,
}

/// Defaults for the report; command-line flags win.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// `text`, `cloc-xml`, `sloccount` or `json`.
    #[serde(default)]
    pub format: Option<String>,

    /// `name`, `files`, `blank`, `comment`, `code` or `tokens`.
    #[serde(default)]
    pub sort: Option<String>,

    #[serde(default)]
    pub by_file: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub single_line_comments: Vec<String>,

    #[serde(default)]
    pub multi_line_comments: Vec<(String, String)>,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
