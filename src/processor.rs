//! Pipeline driver: scan, filter, deduplicate, classify in parallel, fold.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::counter::{BpeTokenCounter, FileAnalyzer, FileRecord};
use crate::error::Result;
use crate::language::{CommentSyntax, ContentClassifier, Language, LanguageRegistry, LanguageResolver};
use crate::output::ScanProgress;
use crate::scanner::{CensusFilter, DirectoryScanner, FileScanner, FilterOptions, retain_unique};
use crate::stats::{Aggregator, AnalysisResult};

/// Pseudo-language collecting files with no known grammar.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ProcessorOptions {
    pub filter: FilterOptions,
    pub gitignore: bool,
    pub skip_duplicated: bool,
    /// Languages to keep; empty keeps all.
    pub include_languages: Vec<String>,
    /// Count unresolved files under [`UNKNOWN_LANGUAGE`] instead of skipping them.
    pub count_unknown: bool,
    pub tokens: bool,
    /// Trace resolution and per-line classification on stderr.
    pub debug: bool,
    pub quiet: bool,
}

enum Visit {
    Counted(FileRecord),
    Skipped(PathBuf),
    Excluded,
}

pub struct Processor<'a> {
    registry: &'a LanguageRegistry,
    classifier: &'a dyn ContentClassifier,
    options: &'a ProcessorOptions,
}

/// Per-run state shared by every worker.
struct RunContext<'r> {
    resolver: LanguageResolver<'r>,
    analyzer: FileAnalyzer<'r>,
    unknown: Language,
    included: HashSet<&'r str>,
    excluded: HashSet<&'r str>,
}

impl<'a> Processor<'a> {
    #[must_use]
    pub const fn new(
        registry: &'a LanguageRegistry,
        classifier: &'a dyn ContentClassifier,
        options: &'a ProcessorOptions,
    ) -> Self {
        Self {
            registry,
            classifier,
            options,
        }
    }

    /// Analyze every file under `paths`.
    ///
    /// # Errors
    /// Returns an error if a filter pattern is invalid, a root cannot be
    /// scanned or the tokenizer fails to load. Per-file failures are
    /// recorded on the file records instead.
    pub fn analyze(&self, paths: &[PathBuf]) -> Result<AnalysisResult> {
        let files = self.collect_files(paths)?;

        let token_counter = if self.options.tokens {
            Some(BpeTokenCounter::cl100k()?)
        } else {
            None
        };
        let mut analyzer = FileAnalyzer::new().with_trace(self.options.debug);
        if let Some(counter) = &token_counter {
            analyzer = analyzer.with_tokens(counter);
        }

        let ctx = RunContext {
            resolver: LanguageResolver::new(self.registry, self.classifier),
            analyzer,
            unknown: Language {
                name: UNKNOWN_LANGUAGE.to_string(),
                extensions: Vec::new(),
                comment_syntax: CommentSyntax::none(),
            },
            included: self.options.include_languages.iter().map(String::as_str).collect(),
            excluded: self.excluded_languages(),
        };

        let progress = ScanProgress::new(files.len() as u64, self.options.quiet || self.options.debug);
        let aggregator = files
            .par_iter()
            .fold(Aggregator::new, |mut aggregator, path| {
                match self.visit(&ctx, path) {
                    Visit::Counted(record) => aggregator.add(record),
                    Visit::Skipped(path) => aggregator.skip(path),
                    Visit::Excluded => {}
                }
                progress.inc();
                aggregator
            })
            .reduce(Aggregator::new, Aggregator::merge);
        progress.finish();

        Ok(aggregator.finish())
    }

    fn collect_files(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let filter = CensusFilter::new(&self.options.filter)?;
        let scanner = DirectoryScanner::with_gitignore(filter, self.options.gitignore);
        let files = scanner.scan_all(paths)?;

        Ok(if self.options.skip_duplicated {
            retain_unique(files)
        } else {
            files
        })
    }

    /// Languages whose extension was excluded: a `py` exclusion also drops
    /// Python scripts recognised by their shebang.
    fn excluded_languages(&self) -> HashSet<&'a str> {
        self.options
            .filter
            .exclude_ext
            .iter()
            .filter_map(|ext| self.registry.get_by_extension(ext))
            .map(|lang| lang.name.as_str())
            .collect()
    }

    fn visit(&self, ctx: &RunContext<'_>, path: &Path) -> Visit {
        let resolved = ctx.resolver.resolve(path, None);
        let language = resolved.as_deref().and_then(|name| self.registry.lookup(name));

        if self.options.debug {
            eprintln!(
                "[resolve] {} -> {}",
                path.display(),
                resolved.as_deref().unwrap_or("<unresolved>")
            );
        }

        let language = match language {
            Some(language) => language,
            None if self.options.count_unknown => &ctx.unknown,
            None => return Visit::Skipped(path.to_path_buf()),
        };

        if ctx.excluded.contains(language.name.as_str())
            || (!ctx.included.is_empty() && !ctx.included.contains(language.name.as_str()))
        {
            return Visit::Excluded;
        }

        Visit::Counted(ctx.analyzer.analyze_file(path, language))
    }
}

#[cfg(test)]
#[path = "processor_tests.rs"]
mod tests;
