use std::fmt::Write;

use crate::error::Result;

use super::{Report, ReportFormatter, display_path};

/// cloc-compatible XML document.
pub struct ClocXmlFormatter;

impl ReportFormatter for ClocXmlFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let total = report.total();
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<results>\n");

        if report.by_file {
            out.push_str("  <files>\n");
            for file in &report.files {
                let _ = writeln!(
                    out,
                    "    <file name=\"{}\" language=\"{}\" blank=\"{}\" comment=\"{}\" code=\"{}\"></file>",
                    escape(&display_path(&file.path)),
                    escape(&file.language),
                    file.blank,
                    file.comment,
                    file.code
                );
            }
            let _ = writeln!(
                out,
                "    <total blank=\"{}\" comment=\"{}\" code=\"{}\"></total>",
                total.blank, total.comment, total.code
            );
            out.push_str("  </files>\n");
        } else {
            out.push_str("  <languages>\n");
            for language in &report.languages {
                let _ = writeln!(
                    out,
                    "    <language name=\"{}\" files_count=\"{}\" blank=\"{}\" comment=\"{}\" code=\"{}\"></language>",
                    escape(&language.name),
                    language.files,
                    language.blank,
                    language.comment,
                    language.code
                );
            }
            let _ = writeln!(
                out,
                "    <total sum_files=\"{}\" blank=\"{}\" comment=\"{}\" code=\"{}\"></total>",
                total.files, total.blank, total.comment, total.code
            );
            out.push_str("  </languages>\n");
        }

        out.push_str("</results>\n");
        Ok(out)
    }
}

/// Escape text for use inside a double-quoted attribute.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "xml_tests.rs"]
mod tests;
