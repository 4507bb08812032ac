use super::super::test_fixtures::sample_result;
use super::*;
use crate::stats::{AnalysisResult, SortKey};

const SEPARATOR: &str = "-------------------------------------------------------------------------------";

fn render(result: &AnalysisResult, by_file: bool, tokens: bool) -> String {
    let report = Report::new(result, by_file, SortKey::Code, tokens).unwrap();
    TextFormatter::new(ColorMode::Never).format(&report).unwrap()
}

#[test]
fn language_table_layout() {
    let result = sample_result();
    let out = render(&result, false, false);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(
        lines,
        [
            SEPARATOR,
            "Language                     files          blank        comment           code",
            SEPARATOR,
            "Rust                             2              4              6             15",
            "Python                           1              2              1              7",
            SEPARATOR,
            "TOTAL                            3              6              7             22",
            SEPARATOR,
        ]
    );
}

#[test]
fn token_column_is_appended() {
    let result = sample_result();
    let out = render(&result, false, true);
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[1].ends_with("code         tokens"));
    assert!(lines[3].ends_with(&format!(" {:>14}", 60)));
    assert!(lines[6].ends_with(&format!(" {:>14}", 85)));
    assert_eq!(lines[0].len(), lines[1].len());
}

#[test]
fn file_table_widens_to_longest_path() {
    let result = sample_result();
    let out = render(&result, true, false);
    let lines: Vec<&str> = out.lines().collect();

    let separator = "-".repeat(70);
    assert_eq!(lines[0], separator);
    assert_eq!(
        lines[1],
        "File                files          blank        comment           code"
    );
    assert_eq!(
        lines[3],
        "./src/main.rs                          3              2             10"
    );
    assert_eq!(lines.len(), 9);
    assert!(lines[7].starts_with("TOTAL "));
    assert!(lines[7].ends_with("22"));
}

#[test]
fn empty_result_still_has_frame() {
    let result = AnalysisResult::default();
    let out = render(&result, false, false);
    assert_eq!(out.lines().count(), 6);
    assert!(out.contains("TOTAL"));
}

#[test]
fn colors_wrap_header_and_total() {
    let result = sample_result();
    let report = Report::new(&result, false, SortKey::Code, false).unwrap();
    let out = TextFormatter::new(ColorMode::Always).format(&report).unwrap();

    assert!(out.contains(&format!("{}Language", ansi::CYAN)));
    assert!(out.contains(&format!("{}TOTAL", ansi::GREEN)));
    assert!(!out.contains(&format!("{}Rust", ansi::GREEN)));
}
