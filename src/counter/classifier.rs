use std::io::{BufRead, Read};

use crate::error::FileError;
use crate::language::CommentSyntax;

use super::LineObserver;

/// Longest physical line accepted, in bytes, excluding the line terminator.
pub const MAX_LINE_LENGTH: usize = 1024 * 1024;

const BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    const fn record(&mut self, kind: LineKind) {
        self.total += 1;
        match kind {
            LineKind::Blank => self.blank += 1,
            LineKind::Comment => self.comment += 1,
            LineKind::Code => self.code += 1,
        }
    }
}

/// One classified line, as seen by a [`LineObserver`].
#[derive(Debug, Clone, Copy)]
pub struct LineEvent<'l> {
    pub kind: LineKind,
    /// The physical line without its terminator, surrounding whitespace kept.
    pub line: &'l str,
    /// Counts including this line.
    pub stats: &'l LineStats,
    /// Whether a multi-line comment is still open after this line.
    pub in_comment: bool,
}

/// Outcome of classifying a whole stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountOutcome {
    pub stats: LineStats,
    /// Set when classification stopped early; `stats` covers the lines read
    /// before the failure.
    pub error: Option<FileError>,
}

/// Per-file state machine assigning every physical line to blank, comment
/// or code.
///
/// The stack of open multi-line delimiter pairs is carried from one line to
/// the next, so lines of one file must be fed in order. A classifier is
/// meant for a single file.
pub struct LineClassifier<'a> {
    syntax: &'a CommentSyntax,
    stack: Vec<&'a (String, String)>,
    stats: LineStats,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax) -> Self {
        Self {
            syntax,
            stack: Vec::new(),
            stats: LineStats::new(),
        }
    }

    /// Classify the next physical line (without its terminator).
    pub fn classify(&mut self, line: &str) -> LineKind {
        let first_line = self.stats.total == 0;
        let kind = self.classify_line(line, first_line);
        self.stats.record(kind);
        kind
    }

    #[must_use]
    pub fn in_comment(&self) -> bool {
        !self.stack.is_empty()
    }

    #[must_use]
    pub const fn stats(&self) -> &LineStats {
        &self.stats
    }

    /// Classify every line of an in-memory source.
    #[must_use]
    pub fn count(mut self, source: &str) -> LineStats {
        for line in source.lines() {
            self.classify(line);
        }
        self.stats
    }

    /// Classify a byte stream line by line, reporting each line to `observer`.
    ///
    /// Lines end at `\n`; a trailing `\r` is dropped and invalid UTF-8 is
    /// replaced. A line longer than [`MAX_LINE_LENGTH`] or a read error stops
    /// the count and is reported in [`CountOutcome::error`].
    pub fn count_reader<R: BufRead, O: LineObserver>(
        mut self,
        mut reader: R,
        mut observer: O,
    ) -> CountOutcome {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            // Room for the line plus a `\r\n` terminator.
            let limit = MAX_LINE_LENGTH as u64 + 2;
            match (&mut reader).take(limit).read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => return self.stop(FileError::Unreadable(e.to_string())),
            }

            if buf.last() == Some(&b'\n') {
                buf.pop();
            }
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
            if buf.len() > MAX_LINE_LENGTH {
                let line = self.stats.total + 1;
                return self.stop(FileError::LineTooLong {
                    line,
                    max: MAX_LINE_LENGTH,
                });
            }

            let line = String::from_utf8_lossy(&buf);
            let kind = self.classify(&line);
            observer.on_line(&LineEvent {
                kind,
                line: &line,
                stats: &self.stats,
                in_comment: self.in_comment(),
            });
        }

        CountOutcome {
            stats: self.stats,
            error: None,
        }
    }

    fn stop(self, error: FileError) -> CountOutcome {
        CountOutcome {
            stats: self.stats,
            error: Some(error),
        }
    }

    fn classify_line(&mut self, raw: &str, first_line: bool) -> LineKind {
        let mut line = raw.trim();

        // Blank wins over everything, even inside an open comment.
        if line.is_empty() {
            return LineKind::Blank;
        }

        if first_line && line.starts_with("#!") {
            return LineKind::Code;
        }

        if self.stack.is_empty() {
            if first_line {
                line = line.strip_prefix(BOM).unwrap_or(line);
            }
            if self.is_single_line_comment(line) {
                return LineKind::Comment;
            }
            if self.syntax.multi_line.is_empty() || !self.contains_multi_line_start(line) {
                return LineKind::Code;
            }
        }

        if self.syntax.multi_line_disabled() {
            return LineKind::Code;
        }

        self.scan(line)
    }

    /// A single-line prefix only counts when the line does not open a
    /// multi-line comment sharing that prefix (`--` vs `--[[`).
    fn is_single_line_comment(&self, line: &str) -> bool {
        self.syntax
            .single_line
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
            && !self
                .syntax
                .multi_line
                .iter()
                .any(|(begin, _)| !begin.is_empty() && line.starts_with(begin.as_str()))
    }

    fn contains_multi_line_start(&self, line: &str) -> bool {
        self.syntax
            .multi_line
            .iter()
            .any(|(begin, _)| !begin.is_empty() && line.contains(begin.as_str()))
    }

    /// Walk the line left to right, opening and closing delimiter pairs.
    ///
    /// The line is code only if every declared pair saw non-whitespace
    /// outside any open span.
    fn scan(&mut self, line: &str) -> LineKind {
        let mut saw_code = vec![false; self.syntax.multi_line.len()];
        let mut pos = 0;

        while pos < line.len() {
            let rest = &line[pos..];
            pos += self
                .step(rest, &mut saw_code)
                .unwrap_or_else(|| rest.chars().next().map_or(1, char::len_utf8));
        }

        if saw_code.iter().all(|&seen| seen) {
            LineKind::Code
        } else {
            LineKind::Comment
        }
    }

    /// Try every pair at the start of `rest` in declared order. Returns the
    /// length of the delimiter consumed, if any; the first pair to open or
    /// close wins.
    fn step(&mut self, rest: &str, saw_code: &mut [bool]) -> Option<usize> {
        let syntax = self.syntax;

        for (idx, pair) in syntax.multi_line.iter().enumerate() {
            let (begin, end) = pair;

            // A toggling pair (begin == end) only opens outside any comment.
            if !begin.is_empty()
                && rest.starts_with(begin.as_str())
                && (begin != end || self.stack.is_empty())
            {
                self.stack.push(pair);
                return Some(begin.len());
            }

            if let Some(top) = self.stack.last().copied() {
                let top_end = top.1.as_str();
                if !top_end.is_empty() && rest.starts_with(top_end) {
                    self.stack.pop();
                    return Some(top_end.len());
                }
            } else if rest.chars().next().is_some_and(|c| !c.is_whitespace()) {
                saw_code[idx] = true;
            }
        }

        None
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
