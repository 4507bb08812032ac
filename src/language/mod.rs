mod classifier;
mod definitions;
mod registry;
mod resolver;

pub use classifier::{ContentClassifier, LinguistClassifier};
pub use registry::{CommentSyntax, Language, LanguageRegistry};
pub use resolver::{LanguageResolver, file_extension, parse_shebang};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
