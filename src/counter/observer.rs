use std::fmt::Write;

use super::{LineEvent, LineKind, TokenCounter};

/// Receives every classified line. Observers never influence classification.
pub trait LineObserver {
    fn on_line(&mut self, event: &LineEvent<'_>);
}

impl LineObserver for () {
    fn on_line(&mut self, _event: &LineEvent<'_>) {}
}

impl<T: LineObserver + ?Sized> LineObserver for &mut T {
    fn on_line(&mut self, event: &LineEvent<'_>) {
        (**self).on_line(event);
    }
}

impl<T: LineObserver> LineObserver for Option<T> {
    fn on_line(&mut self, event: &LineEvent<'_>) {
        if let Some(observer) = self {
            observer.on_line(event);
        }
    }
}

impl<A: LineObserver, B: LineObserver> LineObserver for (A, B) {
    fn on_line(&mut self, event: &LineEvent<'_>) {
        self.0.on_line(event);
        self.1.on_line(event);
    }
}

/// Sums tokens over code and comment lines.
pub struct TokenTally<'a> {
    counter: &'a dyn TokenCounter,
    total: usize,
}

impl<'a> TokenTally<'a> {
    #[must_use]
    pub const fn new(counter: &'a dyn TokenCounter) -> Self {
        Self { counter, total: 0 }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}

impl LineObserver for TokenTally<'_> {
    fn on_line(&mut self, event: &LineEvent<'_>) {
        if event.kind != LineKind::Blank {
            self.total += self.counter.count(event.line);
        }
    }
}

/// Per-line classification trace, buffered so parallel files do not interleave.
#[derive(Debug, Default)]
pub struct DebugTrace {
    buffer: String,
}

impl DebugTrace {
    #[must_use]
    pub fn new(header: &str) -> Self {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "{header}");
        Self { buffer }
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl LineObserver for DebugTrace {
    fn on_line(&mut self, event: &LineEvent<'_>) {
        let tag = match event.kind {
            LineKind::Blank => "BLNK",
            LineKind::Comment => "COMM",
            LineKind::Code => "CODE",
        };
        let _ = writeln!(
            self.buffer,
            "[{tag}, cd:{}, cm:{}, bk:{}, iscm:{}] {}",
            event.stats.code, event.stats.comment, event.stats.blank, event.in_comment, event.line
        );
    }
}

#[cfg(test)]
#[path = "observer_tests.rs"]
mod tests;
