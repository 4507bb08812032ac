use super::*;

#[test]
fn empty_document_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();

    assert!(config.scanner.gitignore);
    assert!(config.scanner.exclude.is_empty());
    assert!(!config.count.tokens);
    assert_eq!(config.output.format, None);
    assert!(config.languages.is_empty());
}

#[test]
fn full_document_round_trips_fields() {
    let content = r#"
[scanner]
gitignore = false
exclude = ["target/**"]

[count]
skip_duplicated = true
count_unknown = true
tokens = true
include_languages = ["Rust", "Go"]
exclude_extensions = ["md"]

[output]
format = "cloc-xml"
sort = "comment"
by_file = true
"#;
    let config: Config = toml::from_str(content).unwrap();

    assert!(!config.scanner.gitignore);
    assert_eq!(config.scanner.exclude, vec!["target/**"]);
    assert!(config.count.skip_duplicated && config.count.count_unknown && config.count.tokens);
    assert_eq!(config.count.include_languages, vec!["Rust", "Go"]);
    assert_eq!(config.count.exclude_extensions, vec!["md"]);
    assert_eq!(config.output.format.as_deref(), Some("cloc-xml"));
    assert_eq!(config.output.sort.as_deref(), Some("comment"));
    assert!(config.output.by_file);
}

#[test]
fn custom_language_fields_default_to_empty() {
    let config: Config = toml::from_str("[languages.Foo]\nextensions = [\"foo\"]\n").unwrap();

    let foo = &config.languages["Foo"];
    assert_eq!(foo.extensions, vec!["foo"]);
    assert!(foo.single_line_comments.is_empty());
    assert!(foo.multi_line_comments.is_empty());
}
