use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use cmtspell::cli::output::{self, OutputFormat};
use cmtspell::engine::CommandEngine;
use cmtspell::filter::StopwordFilter;
use cmtspell::parser::SourceLang;
use cmtspell::report::WriteSink;
use cmtspell::{CommentChecker, Config};
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(name = "cmtspell")]
#[command(version, about = "Spell-check source code comments", long_about = None)]
struct Cli {
    /// Files or directories to scan
    #[arg(value_name = "PATHS")]
    files: Vec<PathBuf>,

    /// Spell engine executable (default: first of spell, aspell, hunspell, ispell)
    #[arg(short, long)]
    engine: Option<String>,

    /// Extra argument passed to the engine after its defaults
    #[arg(long = "engine-arg", value_name = "ARG")]
    engine_args: Vec<String>,

    /// Seconds to wait for the engine before giving up on a comment
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Pattern to strip from comments before checking (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if unknown words are found
    #[arg(long)]
    no_fail: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "cmtspell", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(
        cli.engine.clone(),
        cli.engine_args.clone(),
        cli.ignore_pattern.clone(),
        cli.timeout,
    )?;

    // Validate input files
    if cli.files.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }
    let files = collect_files(&cli.files);

    // Initialize checker; the engine is resolved once, on first use
    let engine = CommandEngine::new(&config);
    let filter = StopwordFilter::new(&config.stopword_patterns);
    let checker = CommentChecker::new(engine, filter);

    // Process files
    let mut results = Vec::new();
    let mut total_unknown = 0;

    for file_path in &files {
        let result = match cli.format {
            OutputFormat::Text => {
                output::print_file_header(file_path, !cli.no_color);
                let mut sink = WriteSink::new(io::stdout().lock());
                checker.scan_path(file_path, &mut sink)?
            }
            OutputFormat::Json => {
                // keep the streamed text report out of the JSON stream
                let mut sink = String::new();
                checker.scan_path(file_path, &mut sink)?
            }
        };

        total_unknown += result.unknown_words();
        results.push((file_path.clone(), result));
    }

    // Print summary
    match cli.format {
        OutputFormat::Json => output::print_json(&results),
        OutputFormat::Text => output::print_scan_summary(total_unknown, &files, !cli.no_color),
    }

    // Exit with appropriate code
    if total_unknown > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

/// Expand directory arguments into the source files beneath them, sorted so
/// output order is stable. Explicit file arguments are scanned as given.
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            eprintln!("Error: File not found: {}", path.display());
            continue;
        }
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = match entry {
                    Ok(e) => e,
                    Err(_) => continue,
                };
                if entry.file_type().is_file()
                    && SourceLang::from_path(entry.path()) != SourceLang::Other
                {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files
}
