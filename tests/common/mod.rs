#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sloc-census binary.
#[macro_export]
macro_rules! sloc_census {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sloc-census"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.sloc-census.toml` in the fixture root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".sloc-census.toml", content);
    }

    /// A small project: two Rust files and one Python file.
    ///
    /// | file              | code | comment | blank |
    /// |-------------------|------|---------|-------|
    /// | src/main.rs       |    3 |       3 |     1 |
    /// | src/util.rs       |    1 |       1 |     0 |
    /// | scripts/build.py  |    2 |       1 |     1 |
    pub fn create_sample_project(&self) {
        self.create_file(
            "src/main.rs",
            "// entry point\n/* multi\n*/\nfn main() {\n\n    run();\n}\n",
        );
        self.create_file("src/util.rs", "/// helper\npub fn run() {}\n");
        self.create_file(
            "scripts/build.py",
            "#!/usr/bin/env python3\n# build script\n\nprint('ok')\n",
        );
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
