use serde::Serialize;

use crate::counter::FileRecord;
use crate::error::Result;
use crate::stats::LanguageRecord;

use super::{Report, ReportFormatter, display_path};

pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(untagged)]
enum JsonOutput {
    Languages {
        languages: Vec<JsonLanguage>,
        total: JsonLanguage,
    },
    Files {
        files: Vec<JsonFile>,
        total: JsonLanguage,
    },
}

#[derive(Serialize)]
struct JsonLanguage {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    files: usize,
    code: usize,
    comment: usize,
    blank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<usize>,
}

#[derive(Serialize)]
struct JsonFile {
    name: String,
    language: String,
    code: usize,
    comment: usize,
    blank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<usize>,
}

impl JsonLanguage {
    fn from_record(record: &LanguageRecord, name: Option<&str>, show_tokens: bool) -> Self {
        Self {
            name: name.map(String::from),
            files: record.files,
            code: record.code,
            comment: record.comment,
            blank: record.blank,
            tokens: show_tokens.then_some(record.tokens),
        }
    }
}

impl JsonFile {
    fn from_record(record: &FileRecord, show_tokens: bool) -> Self {
        Self {
            name: display_path(&record.path),
            language: record.language.clone(),
            code: record.code,
            comment: record.comment,
            blank: record.blank,
            tokens: show_tokens.then_some(record.tokens),
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let total = JsonLanguage::from_record(report.total(), None, report.show_tokens);

        let output = if report.by_file {
            JsonOutput::Files {
                files: report
                    .files
                    .iter()
                    .map(|f| JsonFile::from_record(f, report.show_tokens))
                    .collect(),
                total,
            }
        } else {
            JsonOutput::Languages {
                languages: report
                    .languages
                    .iter()
                    .map(|l| JsonLanguage::from_record(l, Some(l.name.as_str()), report.show_tokens))
                    .collect(),
                total,
            }
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
