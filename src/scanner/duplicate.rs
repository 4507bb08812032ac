use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use sha2::{Digest, Sha256};

/// Drop every file whose content duplicates another file in `paths`.
///
/// Of each group of identical files the lexicographically first path is
/// kept. Files that cannot be read are kept so the run can report them.
/// The result is sorted by path.
#[must_use]
pub fn retain_unique(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort();
    paths.dedup();

    let hashes: Vec<Option<[u8; 32]>> = paths.par_iter().map(|p| content_hash(p)).collect();

    let mut seen = HashSet::new();
    paths
        .into_iter()
        .zip(hashes)
        .filter(|(_, hash)| hash.is_none_or(|h| seen.insert(h)))
        .map(|(path, _)| path)
        .collect()
}

fn content_hash(path: &Path) -> Option<[u8; 32]> {
    let mut file = fs::File::open(path).ok()?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];
    loop {
        let n = file.read(&mut buffer).ok()?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Some(hasher.finalize().into())
}

#[cfg(test)]
#[path = "duplicate_tests.rs"]
mod tests;
