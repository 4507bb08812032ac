use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

struct RustOnlyFilter;

impl FileFilter for RustOnlyFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == "rs")
    }
}

fn names(files: &[PathBuf]) -> Vec<String> {
    let mut names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn scanner_finds_files_in_subdirectories() {
    let temp_dir = TempDir::new().unwrap();
    let sub_dir = temp_dir.path().join("src");
    fs::create_dir(&sub_dir).unwrap();
    fs::write(sub_dir.join("main.rs"), "fn main() {}").unwrap();
    fs::write(temp_dir.path().join("build.rs"), "").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(names(&files), vec!["build.rs", "main.rs"]);
}

#[test]
fn scanner_respects_filter() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("test.rs"), "").unwrap();
    fs::write(temp_dir.path().join("test.txt"), "").unwrap();

    let scanner = DirectoryScanner::new(RustOnlyFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(names(&files), vec!["test.rs"]);
}

#[test]
fn vcs_directories_are_skipped() {
    for use_gitignore in [false, true] {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        fs::write(temp_dir.path().join(".git/config"), "[core]").unwrap();
        fs::write(temp_dir.path().join("lib.rs"), "").unwrap();

        let scanner = DirectoryScanner::with_gitignore(AcceptAllFilter, use_gitignore);
        let files = scanner.scan(temp_dir.path()).unwrap();

        assert_eq!(names(&files), vec!["lib.rs"], "gitignore={use_gitignore}");
    }
}

#[test]
fn gitignore_is_honoured_when_enabled() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".gitignore"), "generated.rs\n").unwrap();
    fs::write(temp_dir.path().join("generated.rs"), "").unwrap();
    fs::write(temp_dir.path().join("lib.rs"), "").unwrap();

    let with = DirectoryScanner::with_gitignore(RustOnlyFilter, true);
    assert_eq!(names(&with.scan(temp_dir.path()).unwrap()), vec!["lib.rs"]);

    let without = DirectoryScanner::new(RustOnlyFilter);
    assert_eq!(
        names(&without.scan(temp_dir.path()).unwrap()),
        vec!["generated.rs", "lib.rs"]
    );
}

#[test]
fn pruned_directories_are_not_descended() {
    let options = FilterOptions {
        not_match_dir: Some("^vendor$".to_string()),
        ..FilterOptions::default()
    };

    for use_gitignore in [false, true] {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("vendor/dep")).unwrap();
        fs::write(temp_dir.path().join("vendor/dep/x.c"), "").unwrap();
        fs::write(temp_dir.path().join("main.c"), "").unwrap();

        let filter = CensusFilter::new(&options).unwrap();
        let scanner = DirectoryScanner::with_gitignore(filter, use_gitignore);
        let files = scanner.scan(temp_dir.path()).unwrap();

        assert_eq!(names(&files), vec!["main.c"], "gitignore={use_gitignore}");
    }
}

#[test]
fn file_roots_are_passed_through() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("one.rs");
    fs::write(&file, "").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    assert_eq!(scanner.scan(&file).unwrap(), vec![file]);
}

#[test]
fn scan_all_combines_roots() {
    let temp_dir1 = TempDir::new().unwrap();
    let temp_dir2 = TempDir::new().unwrap();
    fs::write(temp_dir1.path().join("a.rs"), "").unwrap();
    fs::write(temp_dir2.path().join("b.rs"), "").unwrap();

    let scanner = DirectoryScanner::new(AcceptAllFilter);
    let roots = vec![temp_dir1.path().to_path_buf(), temp_dir2.path().to_path_buf()];
    let files = scanner.scan_all(&roots).unwrap();

    assert_eq!(names(&files), vec!["a.rs", "b.rs"]);
}
