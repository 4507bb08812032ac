mod duplicate;
mod filter;

pub use duplicate::retain_unique;
pub use filter::{CensusFilter, FileFilter, FilterOptions};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Version-control metadata directories, never descended into.
const VCS_DIRS: &[&str] = &[".git", ".svn", ".hg", ".bzr"];

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Scan every root in order and concatenate the results.
    ///
    /// # Errors
    /// Returns the first error from [`FileScanner::scan`].
    fn scan_all(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for root in roots {
            files.extend(self.scan(root)?);
        }
        Ok(files)
    }
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        // Explicit file arguments bypass directory pruning.
        if root.is_file() {
            return if self.filter.should_include(root) {
                vec![root.to_path_buf()]
            } else {
                Vec::new()
            };
        }

        if self.use_gitignore {
            self.scan_with_gitignore(root)
        } else {
            self.scan_without_gitignore(root)
        }
    }

    fn enters(&self, path: &Path, depth: usize) -> bool {
        depth == 0 || (!is_vcs_dir(path) && self.filter.should_enter(path))
    }

    fn scan_without_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !e.file_type().is_dir() || self.enters(e.path(), e.depth()))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_with_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .filter_entry(|e| {
                !e.file_type().is_some_and(|ft| ft.is_dir()) || !is_vcs_dir(e.path())
            })
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .filter(|e| self.parents_entered(e.path(), root) && self.filter.should_include(e.path()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }

    /// `ignore`'s entry filter must be `'static`, so directory pruning from
    /// the census filter is applied per file against its ancestors instead.
    fn parents_entered(&self, path: &Path, root: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(root) else {
            return true;
        };
        let mut current = root.to_path_buf();
        let mut components = relative.components().peekable();
        while let Some(component) = components.next() {
            if components.peek().is_none() {
                break;
            }
            current.push(component);
            if !self.filter.should_enter(&current) {
                return false;
            }
        }
        true
    }
}

fn is_vcs_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| VCS_DIRS.contains(&name))
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
