mod classifier;
mod file;
mod observer;
mod tokens;

pub use classifier::{CountOutcome, LineClassifier, LineEvent, LineKind, LineStats, MAX_LINE_LENGTH};
pub use file::{FileAnalyzer, FileRecord};
pub use observer::{DebugTrace, LineObserver, TokenTally};
pub use tokens::{BpeTokenCounter, TokenCounter};

#[cfg(test)]
mod test_fixtures;
