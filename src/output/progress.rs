use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Counting progress on stderr, shared across rayon workers.
///
/// Hidden when `hidden` is set or stderr is not a terminal.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
    counted: Arc<AtomicU64>,
}

impl ScanProgress {
    #[must_use]
    pub fn new(total: u64, hidden: bool) -> Self {
        Self::with_visibility(total, !hidden && std::io::stderr().is_terminal())
    }

    fn with_visibility(total: u64, visible: bool) -> Self {
        let progress_bar = if visible {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} Counting [{bar:40.cyan/blue}] {pos}/{len} files")
                    // SAFETY: Template is a static string with valid format specifiers
                    .expect("valid template")
                    .progress_chars("█▓░"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        Self {
            progress_bar,
            counted: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record one more file as counted.
    pub fn inc(&self) {
        let count = self.counted.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    /// Clear the bar from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    #[cfg(test)]
    fn position(&self) -> u64 {
        self.counted.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
