use std::fmt::Write;

use crate::error::Result;

use super::{Report, ReportFormatter, display_path};

/// `code<TAB>language<TAB>top-dir<TAB>path`, one line per counted file.
///
/// The format is per file by nature, so it ignores `by_file`.
pub struct SloccountFormatter;

impl ReportFormatter for SloccountFormatter {
    fn format(&self, report: &Report<'_>) -> Result<String> {
        let mut out = String::new();
        for file in &report.files {
            let name = display_path(&file.path);
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}",
                file.code,
                file.language,
                top_dir(&name),
                name
            );
        }
        Ok(out)
    }
}

/// First directory below the root of a `./`- or `/`-anchored path.
fn top_dir(name: &str) -> &str {
    if !(name.starts_with("./") || name.starts_with('/')) {
        return "";
    }
    let parts: Vec<&str> = name.split('/').collect();
    if parts.len() >= 3 { parts[1] } else { "" }
}
