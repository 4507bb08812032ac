//! Semantic checks run after a config parses.

use crate::config::Config;
use crate::output::OutputFormat;
use crate::stats::SortKey;
use crate::{Result, SlocCensusError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error for an unknown output format or sort key, or a custom
/// language that could never match a file.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_output_section(config)?;
    validate_languages(config)?;
    Ok(())
}

fn validate_output_section(config: &Config) -> Result<()> {
    if let Some(format) = &config.output.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| SlocCensusError::Config(format!("output.format: {e}")))?;
    }

    if let Some(sort) = &config.output.sort {
        let key = sort
            .parse::<SortKey>()
            .map_err(|e| SlocCensusError::Config(format!("output.sort: {e}")))?;
        if config.output.by_file && !key.applies_to_files() {
            return Err(SlocCensusError::Config(format!(
                "output.sort = \"{key}\" cannot be combined with output.by_file"
            )));
        }
    }
    Ok(())
}

fn validate_languages(config: &Config) -> Result<()> {
    for (name, language) in &config.languages {
        if name.trim().is_empty() {
            return Err(SlocCensusError::Config(
                "languages: language name must not be empty".to_string(),
            ));
        }

        if language.extensions.iter().any(|ext| ext.is_empty() || ext.starts_with('.')) {
            return Err(SlocCensusError::Config(format!(
                "languages.{name}.extensions: extensions are written without a leading dot"
            )));
        }

        // ("", "") alone disables multi-line comments; anywhere else it is a mistake.
        let sentinel_only = matches!(
            language.multi_line_comments.as_slice(),
            [(begin, end)] if begin.is_empty() && end.is_empty()
        );
        if !sentinel_only
            && language
                .multi_line_comments
                .iter()
                .any(|(begin, end)| begin.is_empty() || end.is_empty())
        {
            return Err(SlocCensusError::Config(format!(
                "languages.{name}.multi_line_comments: delimiters must not be empty"
            )));
        }

        if language.single_line_comments.iter().any(String::is_empty) {
            return Err(SlocCensusError::Config(format!(
                "languages.{name}.single_line_comments: prefixes must not be empty"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
