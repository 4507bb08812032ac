use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::{ContentClassifier, LanguageRegistry};

static SHEBANG_ENV: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: Pattern is a static string literal
    Regex::new(r"^#! *(\S+/env) ([a-zA-Z]+)").expect("valid shebang env regex")
});

static SHEBANG_PATH: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: Pattern is a static string literal
    Regex::new(r"^#! *[.a-zA-Z/]+/([a-zA-Z]+)").expect("valid shebang path regex")
});

/// Longest first line read while looking for a shebang.
const SHEBANG_READ_LIMIT: u64 = 4096;

/// Build and config files recognised by their exact name.
const FILENAMES: &[(&str, &str)] = &[
    ("meson.build", "Meson"),
    ("meson_options.txt", "Meson"),
    ("CMakeLists.txt", "CMake"),
    ("configure.ac", "M4"),
    ("Makefile.am", "Makefile"),
    ("build.xml", "Ant"),
    ("pom.xml", "Maven"),
];

/// Names compared after lowercasing. `None` means "never count this file".
const FILENAMES_CASE_INSENSITIVE: &[(&str, Option<&str>)] = &[
    ("makefile", Some("Makefile")),
    ("nukefile", Some("Nu")),
    ("rebar", None),
];

/// Interpreters whose name differs from the language they run.
const INTERPRETER_ALIASES: &[(&str, &str)] = &[
    ("gosh", "Scheme"),
    ("make", "Makefile"),
    ("perl", "Perl"),
    ("rc", "Plan9 Shell"),
    ("python", "Python"),
    ("ruby", "Ruby"),
    ("escript", "Erlang"),
    ("node", "JavaScript"),
];

/// Ambiguous extensions whose classifier answer, whatever it is, is replaced
/// by a fixed language.
const REMAPPED_AMBIGUOUS: &[(&str, &str)] = &[("mo", "Motoko")];

enum FilenameRule {
    Language(&'static str),
    Skip,
}

/// Maps a file path, and when needed its content, to a language identifier.
pub struct LanguageResolver<'a> {
    registry: &'a LanguageRegistry,
    classifier: &'a dyn ContentClassifier,
}

impl<'a> LanguageResolver<'a> {
    #[must_use]
    pub const fn new(registry: &'a LanguageRegistry, classifier: &'a dyn ContentClassifier) -> Self {
        Self {
            registry,
            classifier,
        }
    }

    /// Resolve the language of `path`.
    ///
    /// `content` may be supplied when the caller already holds the bytes;
    /// otherwise the file is read on demand for content sniffing and shebang
    /// detection. Returns `None` when no language can be determined.
    #[must_use]
    pub fn resolve(&self, path: &Path, content: Option<&[u8]>) -> Option<String> {
        let file_name = path.file_name()?.to_str()?;

        match match_filename(file_name) {
            Some(FilenameRule::Language(lang)) => return Some(lang.to_string()),
            Some(FilenameRule::Skip) => return None,
            None => {}
        }

        let ext = file_extension(file_name);

        if let Some(ext) = ext {
            if self.registry.is_ambiguous(ext) {
                return self.resolve_ambiguous(path, ext, content);
            }
            if let Some(lang) = self.registry.get_by_extension(ext) {
                return Some(lang.name.clone());
            }
        }

        if let Some(lang) = self.resolve_shebang(path, content) {
            return Some(lang);
        }

        ext.map(String::from)
    }

    fn resolve_ambiguous(&self, path: &Path, ext: &str, content: Option<&[u8]>) -> Option<String> {
        let content = match content {
            Some(bytes) => Cow::Borrowed(bytes),
            None => Cow::Owned(std::fs::read(path).ok()?),
        };

        let remapped = REMAPPED_AMBIGUOUS.iter().find(|(e, _)| *e == ext);
        let candidates: &[String] = if remapped.is_some() {
            &[]
        } else {
            self.registry.ambiguous_candidates(ext)
        };

        let lang = self.classifier.classify(ext, &content, candidates)?;

        if let Some(&(_, sibling)) = remapped {
            return Some(sibling.to_string());
        }

        Some(self.canonicalize(&lang))
    }

    fn resolve_shebang(&self, path: &Path, content: Option<&[u8]>) -> Option<String> {
        let first_line = match content {
            Some(bytes) => {
                let end = bytes.iter().position(|&b| b == b'\n').unwrap_or(bytes.len());
                String::from_utf8_lossy(&bytes[..end]).into_owned()
            }
            None => read_first_line(path)?,
        };

        let interpreter = parse_shebang(&first_line)?;

        if let Some(&(_, lang)) = INTERPRETER_ALIASES.iter().find(|(i, _)| *i == interpreter) {
            return Some(lang.to_string());
        }

        Some(self.canonicalize(interpreter))
    }

    fn canonicalize(&self, identifier: &str) -> String {
        self.registry
            .canonical_name(identifier)
            .unwrap_or(identifier)
            .to_string()
    }
}

fn match_filename(file_name: &str) -> Option<FilenameRule> {
    if let Some(&(_, lang)) = FILENAMES.iter().find(|(name, _)| *name == file_name) {
        return Some(FilenameRule::Language(lang));
    }

    let lower = file_name.to_lowercase();
    FILENAMES_CASE_INSENSITIVE
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|&(_, lang)| lang.map_or(FilenameRule::Skip, FilenameRule::Language))
}

/// Text after the last `.` of a file name, if any.
///
/// Unlike [`Path::extension`], a leading dot counts: `.bashrc` has the
/// extension `bashrc`.
#[must_use]
pub fn file_extension(file_name: &str) -> Option<&str> {
    file_name
        .rfind('.')
        .map(|idx| &file_name[idx + 1..])
        .filter(|ext| !ext.is_empty())
}

/// Extract the interpreter named by a `#!` line.
#[must_use]
pub fn parse_shebang(line: &str) -> Option<&str> {
    let line = line.trim_start();
    if line.len() <= 2 || !line.starts_with("#!") {
        return None;
    }

    SHEBANG_ENV
        .captures(line)
        .and_then(|caps| caps.get(2))
        .or_else(|| SHEBANG_PATH.captures(line).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str())
}

fn read_first_line(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file.take(SHEBANG_READ_LIMIT));
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line).ok()?;
    Some(String::from_utf8_lossy(&line).into_owned())
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
