use std::path::PathBuf;

use super::*;

#[test]
fn cli_default_path() {
    let cli = Cli::parse_from(["sloc-census"]);
    assert_eq!(cli.paths, vec![PathBuf::from(".")]);
    assert!(!cli.by_file);
    assert_eq!(cli.sort, None);
    assert_eq!(cli.output_type, None);
    assert_eq!(cli.color, ColorChoice::Auto);
}

#[test]
fn cli_with_paths() {
    let cli = Cli::parse_from(["sloc-census", "src", "tests"]);
    assert_eq!(cli.paths, vec![PathBuf::from("src"), PathBuf::from("tests")]);
}

#[test]
fn cli_output_options() {
    let cli = Cli::parse_from([
        "sloc-census",
        "--by-file",
        "--sort",
        "comment",
        "--output-type",
        "cloc-xml",
    ]);
    assert!(cli.by_file);
    assert_eq!(cli.sort, Some(SortKey::Comment));
    assert_eq!(cli.output_type, Some(OutputFormat::ClocXml));
}

#[test]
fn cli_output_type_accepts_default_alias() {
    let cli = Cli::parse_from(["sloc-census", "--output-type", "default"]);
    assert_eq!(cli.output_type, Some(OutputFormat::Text));
}

#[test]
fn cli_rejects_unknown_sort_key() {
    assert!(Cli::try_parse_from(["sloc-census", "--sort", "size"]).is_err());
    assert!(Cli::try_parse_from(["sloc-census", "--output-type", "yaml"]).is_err());
}

#[test]
fn cli_comma_separated_lists() {
    let cli = Cli::parse_from([
        "sloc-census",
        "--exclude-ext",
        "js,json",
        "--include-lang",
        "Go,Rust",
    ]);
    assert_eq!(cli.exclude_ext, vec!["js", "json"]);
    assert_eq!(cli.include_lang, vec!["Go", "Rust"]);
}

#[test]
fn cli_regex_filters() {
    let cli = Cli::parse_from([
        "sloc-census",
        "--match",
        r"\.rs$",
        "--not-match",
        "_test",
        "--match-d",
        "src",
        "--not-match-d",
        "vendor",
    ]);
    assert_eq!(cli.match_file.as_deref(), Some(r"\.rs$"));
    assert_eq!(cli.not_match_file.as_deref(), Some("_test"));
    assert_eq!(cli.match_dir.as_deref(), Some("src"));
    assert_eq!(cli.not_match_dir.as_deref(), Some("vendor"));
}

#[test]
fn cli_exclude_repeats() {
    let cli = Cli::parse_from(["sloc-census", "-x", "target/**", "--exclude", "*.min.js"]);
    assert_eq!(cli.exclude, vec!["target/**", "*.min.js"]);
}

#[test]
fn cli_counting_flags() {
    let cli = Cli::parse_from([
        "sloc-census",
        "--skip-duplicated",
        "--tokens",
        "--unknown",
        "--no-gitignore",
    ]);
    assert!(cli.skip_duplicated);
    assert!(cli.tokens);
    assert!(cli.unknown);
    assert!(cli.no_gitignore);
}

#[test]
fn cli_verbose_counts() {
    let cli = Cli::parse_from(["sloc-census", "-vv"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_config_conflicts_with_no_config() {
    let cli = Cli::parse_from(["sloc-census", "--config", "custom.toml"]);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));

    assert!(Cli::try_parse_from(["sloc-census", "--config", "a.toml", "--no-config"]).is_err());
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
