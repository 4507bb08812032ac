use super::super::test_fixtures::{file, sample_result};
use super::*;
use crate::stats::{Aggregator, SortKey};

#[test]
fn language_document() {
    let result = sample_result();
    let report = Report::new(&result, false, SortKey::Code, false).unwrap();
    let out = ClocXmlFormatter.format(&report).unwrap();

    assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<results>\n  <languages>\n"));
    assert!(out.contains(
        "<language name=\"Rust\" files_count=\"2\" blank=\"4\" comment=\"6\" code=\"15\"></language>"
    ));
    assert!(out.contains("<total sum_files=\"3\" blank=\"6\" comment=\"7\" code=\"22\"></total>"));
    assert!(out.ends_with("  </languages>\n</results>\n"));

    let rust = out.find("name=\"Rust\"").unwrap();
    let python = out.find("name=\"Python\"").unwrap();
    assert!(rust < python);
}

#[test]
fn file_document() {
    let result = sample_result();
    let report = Report::new(&result, true, SortKey::Name, false).unwrap();
    let out = ClocXmlFormatter.format(&report).unwrap();

    assert!(out.contains("  <files>\n"));
    assert!(out.contains(
        "<file name=\"./src/lib.rs\" language=\"Rust\" blank=\"1\" comment=\"4\" code=\"5\"></file>"
    ));
    assert!(out.contains("<total blank=\"6\" comment=\"7\" code=\"22\"></total>"));
    assert!(!out.contains("locked.c"));
}

#[test]
fn attributes_are_escaped() {
    let mut aggregator = Aggregator::new();
    aggregator.add(file("./a&b/\"q\".cpp", "C++", 1, 0, 0, 0));
    let result = aggregator.finish();
    let report = Report::new(&result, true, SortKey::Code, false).unwrap();
    let out = ClocXmlFormatter.format(&report).unwrap();

    assert!(out.contains("name=\"./a&amp;b/&quot;q&quot;.cpp\""));
}

#[test]
fn escape_handles_markup() {
    assert_eq!(escape("<a & 'b'>"), "&lt;a &amp; &apos;b&apos;&gt;");
    assert_eq!(escape("plain"), "plain");
}
