use std::fmt::Write;

use crate::language::LanguageRegistry;

/// Every known language with its extensions, sorted by name.
#[must_use]
pub fn format_language_list(registry: &LanguageRegistry) -> String {
    let mut languages: Vec<&str> = registry.all().iter().map(|l| l.name.as_str()).collect();
    languages.sort_unstable();

    let mut out = String::new();
    for name in languages {
        let _ = writeln!(out, "{name:<30} ({})", registry.extensions_of(name).join(","));
    }
    out
}
