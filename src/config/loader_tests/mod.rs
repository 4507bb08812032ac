mod mock_fs;

use std::path::{Path, PathBuf};

use super::*;
use mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
    assert!(config.scanner.gitignore);
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file(
            "/my/project/.sloc-census.toml",
            "[count]\nskip_duplicated = true\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert!(config.count.skip_duplicated);
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new()
        .with_config_dir(Some(PathBuf::from("/home/u/.config/sloc-census")))
        .with_file(
            "/home/u/.config/sloc-census/config.toml",
            "[output]\nformat = \"json\"\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.output.format.as_deref(), Some("json"));
}

#[test]
fn local_config_wins_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.sloc-census.toml", "[output]\nsort = \"name\"\n")
        .with_file(
            "/home/user/.config/sloc-census/config.toml",
            "[output]\nsort = \"blank\"\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    assert_eq!(config.output.sort.as_deref(), Some("name"));
}

#[test]
fn no_user_config_dir_is_not_an_error() {
    let fs = MockFileSystem::new().with_config_dir(None);

    assert!(FileConfigLoader::with_fs(fs).load().is_ok());
}

#[test]
fn load_from_missing_path_is_file_read_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("/nowhere.toml")).unwrap_err();

    assert!(matches!(err, SlocCensusError::FileRead { .. }));
}

#[test]
fn syntax_error_is_toml_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.sloc-census.toml", "[count\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, SlocCensusError::TomlParse(_)));
}

#[test]
fn semantic_error_is_rejected_on_load() {
    let fs = MockFileSystem::new().with_file(
        "/project/.sloc-census.toml",
        "[output]\nformat = \"yaml\"\n",
    );

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, SlocCensusError::Config(_)));
}

#[test]
fn parses_custom_languages_in_declared_order() {
    let content = r##"
[languages.Zed]
extensions = ["zed"]
single_line_comments = ["#"]

[languages.Alpha]
extensions = ["alp"]
multi_line_comments = [["(*", "*)"]]
"##;
    let fs = MockFileSystem::new().with_file("/project/.sloc-census.toml", content);

    let config = FileConfigLoader::with_fs(fs).load().unwrap();

    let names: Vec<&str> = config.languages.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["Zed", "Alpha"]);
    assert_eq!(
        config.languages["Alpha"].multi_line_comments,
        vec![("(*".to_string(), "*)".to_string())]
    );
}
