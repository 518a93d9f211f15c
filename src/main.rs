//! wordfreq CLI: word-frequency statistics for a plain-text book.
//!
//! Thin wrapper over the `word-count` library crate.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use word_count::{
    Catalog, CatalogEntry, DEFAULT_INITIAL_CAPACITY, TableConfig, WordCounter, WordTokenizer,
};

const BANNER: &str = "========================================";

/// wordfreq: counts the words of a book and reports frequency statistics.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Text file to analyze instead of picking a book from the catalog.
    #[arg(long, conflicts_with = "book")]
    file: Option<PathBuf>,

    /// Catalog number of the book to analyze. Without it a menu is shown.
    #[arg(long)]
    book: Option<usize>,

    /// TOML catalog listing the selectable books.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory holding the bundled `books/` folder (used without --catalog).
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Initial capacity of the word table.
    #[arg(long, default_value_t = DEFAULT_INITIAL_CAPACITY, value_parser = parse_capacity)]
    initial_capacity: usize,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also list every distinct word with its count, in ascending order.
    #[arg(long)]
    list: bool,

    /// Log debug events to stderr (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_capacity(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("capacity must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // The flag only sets the default; RUST_LOG directives win.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let (title, path) = match &args.file {
        Some(path) => (path.display().to_string(), path.clone()),
        None => {
            let catalog = match &args.catalog {
                Some(path) => Catalog::load(path)?,
                None => Catalog::builtin(&args.data_dir),
            };
            let entry = match args.book {
                Some(choice) => catalog.select(choice)?.clone(),
                None => prompt_selection(&catalog)?,
            };
            (entry.title, entry.path)
        }
    };

    eprintln!("Analyzing: {title}");
    info!(path = %path.display(), capacity = args.initial_capacity, "analysis started");

    let mut counter = WordCounter::with_config(TableConfig {
        initial_capacity: args.initial_capacity,
    });
    let lines = counter
        .process_file(&path, &WordTokenizer)
        .with_context(|| format!("analysis of {title} aborted"))?;
    debug!(lines, words = counter.total_words(), "analysis finished");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => write_text(&mut out, &counter, args.list)?,
        Format::Json => write_json(&mut out, &counter, args.list)?,
    }
    out.flush()?;

    Ok(())
}

/// Show the catalog menu on stderr and read one answer from stdin.
fn prompt_selection(catalog: &Catalog) -> Result<CatalogEntry> {
    let stderr = io::stderr();
    let mut err = stderr.lock();
    writeln!(err, "{BANNER}")?;
    writeln!(err, "{:^40}", "BOOK WORD COUNT")?;
    writeln!(err, "{BANNER}")?;
    writeln!(err)?;
    writeln!(err, "Available books:")?;
    write!(err, "{catalog}")?;
    writeln!(err)?;
    write!(err, "Select a book (1-{}): ", catalog.len())?;
    err.flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("cannot read selection")?;

    Ok(catalog.select_input(&answer)?.clone())
}

fn write_text(out: &mut impl Write, counter: &WordCounter, list: bool) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{:^40}", "RESULTS")?;
    writeln!(out, "{BANNER}")?;
    write!(out, "{}", counter.report())?;

    if list {
        writeln!(out)?;
        writeln!(out, "Vocabulary:")?;
        for (word, count) in counter.frequencies() {
            writeln!(out, "{word}: {count}")?;
        }
    }
    Ok(())
}

fn write_json(out: &mut impl Write, counter: &WordCounter, list: bool) -> Result<()> {
    let mut value = serde_json::to_value(counter.report())?;
    if list {
        let vocabulary: serde_json::Map<String, serde_json::Value> = counter
            .frequencies()
            .map(|(word, count)| (word.to_string(), count.into()))
            .collect();
        value["vocabulary"] = serde_json::Value::Object(vocabulary);
    }

    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}
