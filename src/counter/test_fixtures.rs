//! Shared grammars for counter tests.

use crate::counter::TokenCounter;
use crate::language::CommentSyntax;

/// One token per whitespace-separated word.
pub struct WordCounter;

impl TokenCounter for WordCounter {
    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

pub fn c_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/")])
}

/// Triple-quoted strings as a toggling pair.
pub fn python_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![("\"\"\"", "\"\"\"")])
}

/// Single-line prefix shared with the multi-line opener.
pub fn lua_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["--"], vec![("--[[", "]]")])
}

/// Two independent pairs, as in Svelte or Vue components.
pub fn svelte_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["//"], vec![("/*", "*/"), ("<!--", "-->")])
}

/// Multi-line comments explicitly disabled with the `("", "")` sentinel.
pub fn ada_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["--"], vec![("", "")])
}

/// Single-line comments only, no multi-line pairs at all.
pub fn hash_only_syntax() -> CommentSyntax {
    CommentSyntax::new(vec!["#"], vec![])
}
