use std::path::Path;

use clap::Parser;

use sloc_census::cli::Cli;
use sloc_census::config::{Config, ConfigLoader, FileConfigLoader};
use sloc_census::language::{LinguistClassifier, LanguageRegistry};
use sloc_census::output::{
    ColorMode, ErrorOutput, OutputFormat, Report, ReportFormatter, display_path, format_language_list,
};
use sloc_census::processor::{Processor, ProcessorOptions};
use sloc_census::scanner::FilterOptions;
use sloc_census::stats::{AnalysisResult, SortKey};
use sloc_census::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, SlocCensusError};

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> sloc_census::Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let registry = LanguageRegistry::with_custom_languages(&config.languages);

    if cli.show_lang {
        print!("{}", format_language_list(&registry));
        return Ok(EXIT_SUCCESS);
    }

    let format = effective_format(cli, &config)?;
    let sort = effective_sort(cli, &config)?;
    let by_file = cli.by_file || config.output.by_file;
    if by_file && !sort.applies_to_files() {
        return Err(SlocCensusError::Config(format!(
            "--sort {sort} cannot be combined with --by-file"
        )));
    }

    let options = processor_options(cli, &config);
    let classifier = LinguistClassifier;
    let result = Processor::new(&registry, &classifier, &options).analyze(&cli.paths)?;

    let color = ColorMode::from(cli.color);
    let report = Report::new(&result, by_file, sort, options.tokens)?;
    let output = format.formatter(color).format(&report)?;
    print!("{output}");
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }

    if cli.verbose > 0 && !cli.quiet {
        report_diagnostics(&result, cli.verbose, color);
    }

    Ok(EXIT_SUCCESS)
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> sloc_census::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn effective_format(cli: &Cli, config: &Config) -> sloc_census::Result<OutputFormat> {
    if let Some(format) = cli.output_type {
        return Ok(format);
    }
    config
        .output
        .format
        .as_deref()
        .map_or(Ok(OutputFormat::default()), str::parse)
        .map_err(SlocCensusError::Config)
}

fn effective_sort(cli: &Cli, config: &Config) -> sloc_census::Result<SortKey> {
    if let Some(sort) = cli.sort {
        return Ok(sort);
    }
    config
        .output
        .sort
        .as_deref()
        .map_or(Ok(SortKey::default()), str::parse)
        .map_err(SlocCensusError::Config)
}

/// Command-line flags layered over the config file: booleans are or-ed,
/// lists are concatenated.
fn processor_options(cli: &Cli, config: &Config) -> ProcessorOptions {
    let mut exclude_ext = config.count.exclude_extensions.clone();
    exclude_ext.extend(cli.exclude_ext.iter().cloned());

    let mut exclude = config.scanner.exclude.clone();
    exclude.extend(cli.exclude.iter().cloned());

    let include_languages = if cli.include_lang.is_empty() {
        config.count.include_languages.clone()
    } else {
        cli.include_lang.clone()
    };

    ProcessorOptions {
        filter: FilterOptions {
            exclude_ext,
            exclude,
            match_file: cli.match_file.clone(),
            not_match_file: cli.not_match_file.clone(),
            match_dir: cli.match_dir.clone(),
            not_match_dir: cli.not_match_dir.clone(),
        },
        gitignore: config.scanner.gitignore && !cli.no_gitignore,
        skip_duplicated: cli.skip_duplicated || config.count.skip_duplicated,
        include_languages,
        count_unknown: cli.unknown || config.count.count_unknown,
        tokens: cli.tokens || config.count.tokens,
        debug: cli.debug,
        quiet: cli.quiet,
    }
}

fn report_diagnostics(result: &AnalysisResult, verbose: u8, color: ColorMode) {
    let output = ErrorOutput::new(color);

    for record in result.errors() {
        let detail = record.error.as_ref().map(ToString::to_string);
        output.print_warning(&display_path(&record.path), detail.as_deref());
    }

    if result.skipped.is_empty() {
        return;
    }
    output.print_warning(
        &format!("skipped {} file(s) of unknown language", result.skipped.len()),
        None,
    );
    if verbose > 1 {
        for path in &result.skipped {
            eprintln!("  {}", display_path(path));
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
