use std::path::PathBuf;

use crate::counter::FileRecord;
use crate::stats::{Aggregator, AnalysisResult};

pub fn file(path: &str, language: &str, code: usize, comment: usize, blank: usize, tokens: usize) -> FileRecord {
    FileRecord {
        path: PathBuf::from(path),
        language: language.to_string(),
        code,
        comment,
        blank,
        tokens,
        error: None,
    }
}

/// Rust: 2 files, 15 code; Python: 1 file, 7 code.
pub fn sample_result() -> AnalysisResult {
    let mut aggregator = Aggregator::new();
    aggregator.add(file("./src/main.rs", "Rust", 10, 2, 3, 40));
    aggregator.add(file("./src/lib.rs", "Rust", 5, 4, 1, 20));
    aggregator.add(file("./scripts/build.py", "Python", 7, 1, 2, 25));
    aggregator.add(FileRecord::unreadable("./locked.c", "permission denied"));
    aggregator.finish()
}
