use std::str::FromStr;

use super::test_fixtures::sample_result;
use super::*;

#[test]
fn output_format_from_str() {
    assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str("default").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str("cloc-xml").unwrap(), OutputFormat::ClocXml);
    assert_eq!(OutputFormat::from_str("XML").unwrap(), OutputFormat::ClocXml);
    assert_eq!(OutputFormat::from_str("sloccount").unwrap(), OutputFormat::Sloccount);
    assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
    assert!(OutputFormat::from_str("yaml").is_err());
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn report_sorts_languages_by_key() {
    let result = sample_result();

    let report = Report::new(&result, false, SortKey::Code, false).unwrap();
    let names: Vec<&str> = report.languages.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Rust", "Python"]);

    let report = Report::new(&result, false, SortKey::Name, false).unwrap();
    let names: Vec<&str> = report.languages.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Python", "Rust"]);
}

#[test]
fn report_leaves_out_files_without_language() {
    let result = sample_result();
    assert_eq!(result.files.len(), 4);

    let report = Report::new(&result, true, SortKey::Code, false).unwrap();
    let paths: Vec<String> = report.files.iter().map(|f| display_path(&f.path)).collect();
    assert_eq!(paths, ["./src/main.rs", "./scripts/build.py", "./src/lib.rs"]);
}

#[test]
fn report_rejects_files_key_per_file() {
    let result = sample_result();
    assert!(Report::new(&result, true, SortKey::Files, false).is_err());
    assert!(Report::new(&result, false, SortKey::Files, false).is_ok());
}

#[test]
fn every_format_renders_the_sample() {
    let result = sample_result();
    let report = Report::new(&result, false, SortKey::Code, true).unwrap();

    for format in [
        OutputFormat::Text,
        OutputFormat::ClocXml,
        OutputFormat::Sloccount,
        OutputFormat::Json,
    ] {
        let out = format.formatter(ColorMode::Never).format(&report).unwrap();
        assert!(out.contains("Rust"), "{format:?} output lacks Rust: {out}");
    }
}
