use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::CustomLanguageConfig;

use super::definitions::{AMBIGUOUS_EXTENSIONS, EXTENSIONS, LANGUAGES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSyntax {
    pub single_line: Vec<String>,
    pub multi_line: Vec<(String, String)>,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(single_line: Vec<&str>, multi_line: Vec<(&str, &str)>) -> Self {
        Self {
            single_line: single_line.into_iter().map(String::from).collect(),
            multi_line: multi_line
                .into_iter()
                .map(|(s, e)| (s.to_string(), e.to_string()))
                .collect(),
        }
    }

    /// Grammar without any comment syntax: every non-blank line is code.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            single_line: Vec::new(),
            multi_line: Vec::new(),
        }
    }

    /// True when the only multi-line entry is the `("", "")` sentinel.
    #[must_use]
    pub fn multi_line_disabled(&self) -> bool {
        matches!(self.multi_line.as_slice(), [(begin, end)] if begin.is_empty() && end.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub comment_syntax: CommentSyntax,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, comment_syntax: CommentSyntax) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            comment_syntax,
        }
    }
}

/// Immutable table of language grammars, built once and shared by reference.
#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    name_map: HashMap<String, usize>,
    extension_map: HashMap<String, usize>,
    ambiguous: HashMap<String, Vec<String>>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            name_map: HashMap::new(),
            extension_map: HashMap::new(),
            ambiguous: HashMap::new(),
        }
    }

    /// Register a language. A language with an existing name replaces the
    /// previous grammar; its extensions take over any earlier mapping.
    pub fn register(&mut self, language: Language) {
        let idx = if let Some(&idx) = self.name_map.get(&language.name) {
            let previous = &mut self.languages[idx];
            previous.comment_syntax = language.comment_syntax;
            for ext in language.extensions {
                if !previous.extensions.contains(&ext) {
                    previous.extensions.push(ext);
                }
            }
            idx
        } else {
            let idx = self.languages.len();
            self.name_map.insert(language.name.clone(), idx);
            self.languages.push(language);
            idx
        };

        for ext in &self.languages[idx].extensions {
            self.extension_map.insert(ext.clone(), idx);
            self.ambiguous.remove(ext);
        }
    }

    /// Mark an extension as shared by several languages.
    pub fn register_ambiguous(&mut self, ext: &str, candidates: Vec<String>) {
        self.extension_map.remove(ext);
        self.ambiguous.insert(ext.to_string(), candidates);
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Language> {
        self.name_map.get(name).map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        self.extension_map
            .get(ext)
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn is_ambiguous(&self, ext: &str) -> bool {
        self.ambiguous.contains_key(ext)
    }

    /// Languages a content classifier may choose between for `ext`.
    #[must_use]
    pub fn ambiguous_candidates(&self, ext: &str) -> &[String] {
        self.ambiguous.get(ext).map_or(&[], Vec::as_slice)
    }

    /// Map a resolver identifier to a registered language name.
    ///
    /// The identifier is tried as an extension key first (`py`, `cmake`,
    /// `bash`), then as a language name.
    #[must_use]
    pub fn canonical_name(&self, identifier: &str) -> Option<&str> {
        self.get_by_extension(identifier)
            .or_else(|| self.lookup(identifier))
            .map(|lang| lang.name.as_str())
    }

    /// All extensions resolving to `name`, including ambiguous ones.
    #[must_use]
    pub fn extensions_of(&self, name: &str) -> Vec<&str> {
        let mut exts: Vec<&str> = self
            .lookup(name)
            .map(|lang| lang.extensions.iter().map(String::as_str).collect())
            .unwrap_or_default();

        let mut shared: Vec<&str> = self
            .ambiguous
            .iter()
            .filter(|(_, candidates)| candidates.iter().any(|c| c == name))
            .map(|(ext, _)| ext.as_str())
            .collect();
        shared.sort_unstable();
        exts.extend(shared);
        exts
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    #[must_use]
    pub fn with_custom_languages(custom: &IndexMap<String, CustomLanguageConfig>) -> Self {
        let mut registry = Self::default();

        for (name, config) in custom {
            let syntax = CommentSyntax {
                single_line: config.single_line_comments.clone(),
                multi_line: config.multi_line_comments.clone(),
            };
            let language = Language {
                name: name.clone(),
                extensions: config.extensions.clone(),
                comment_syntax: syntax,
            };
            registry.register(language);
        }

        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        for &(name, single_line, multi_line) in LANGUAGES {
            registry.register(Language::new(
                name,
                Vec::new(),
                CommentSyntax::new(single_line.to_vec(), multi_line.to_vec()),
            ));
        }

        for &(ext, name) in EXTENSIONS {
            if let Some(&idx) = registry.name_map.get(name) {
                registry.languages[idx].extensions.push(ext.to_string());
                registry.extension_map.insert(ext.to_string(), idx);
            }
        }

        for &(ext, candidates) in AMBIGUOUS_EXTENSIONS {
            registry.register_ambiguous(ext, candidates.iter().map(|c| (*c).to_string()).collect());
        }

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
