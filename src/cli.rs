use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};
use crate::stats::SortKey;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sloc-census")]
#[command(author, version, about = "Count blank, comment and code lines per language")]
#[command(long_about = "Count physical lines of source code, grouped by language.\n\n\
    Every line is classified as blank, comment or code using the comment\n\
    grammar of the file's language.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Files or directories to count
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Report one row per file instead of one per language
    #[arg(long)]
    pub by_file: bool,

    /// Sort rows by [possible values: name, files, blank, comment, code, tokens]
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Output format [possible values: default, cloc-xml, sloccount, json]
    #[arg(long, alias = "output")]
    pub output_type: Option<OutputFormat>,

    /// Print every known language with its extensions and exit
    #[arg(long)]
    pub show_lang: bool,

    /// File extensions to leave out (comma-separated, e.g., js,json)
    #[arg(long, value_delimiter = ',')]
    pub exclude_ext: Vec<String>,

    /// Count only these languages (comma-separated, e.g., Go,Rust)
    #[arg(long, value_delimiter = ',')]
    pub include_lang: Vec<String>,

    /// Include only file names matching this regex
    #[arg(long = "match")]
    pub match_file: Option<String>,

    /// Leave out file names matching this regex
    #[arg(long = "not-match")]
    pub not_match_file: Option<String>,

    /// Include only files whose directory path matches this regex
    #[arg(long = "match-d")]
    pub match_dir: Option<String>,

    /// Skip directories whose name matches this regex
    #[arg(long = "not-match-d")]
    pub not_match_dir: Option<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Count files with identical content only once
    #[arg(long)]
    pub skip_duplicated: bool,

    /// Count tokens on code and comment lines
    #[arg(long)]
    pub tokens: bool,

    /// Count files of unknown language under "Unknown"
    #[arg(long)]
    pub unknown: bool,

    /// Walk into directories ignored by .gitignore
    #[arg(long)]
    pub no_gitignore: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Trace language resolution and line classification on stderr
    #[arg(long)]
    pub debug: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
