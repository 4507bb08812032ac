//! Path display with forward-slash separators on every platform.

use std::path::Path;

/// Format a path as it is shown in reports.
#[must_use]
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_relative_paths_as_given() {
        assert_eq!(display_path(Path::new("./src/main.rs")), "./src/main.rs");
    }

    #[test]
    fn normalizes_backslashes() {
        assert_eq!(display_path(Path::new(r"src\lib.rs")), "src/lib.rs");
    }
}
