use anyhow::{Context, Result};
use clap::Parser;
use data_loader::{Dataset, DatasetPaths, RecordStore};
use query_engine::{Dispatcher, QueryOptions};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// movie-query - answer LOOKUP/CONTAINS/YEAR_AND_GENRE/RUNTIME/MOST_VOTES/TOP
/// commands over the IMDb title datasets
#[derive(Parser, Debug)]
#[command(name = "movie-query")]
#[command(about = "Query IMDb title and rating datasets from a command stream", long_about = None)]
struct Cli {
    /// Directory holding the <stem>.basics.tsv and <stem>.ratings.tsv files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Use small.basics.tsv / small.ratings.tsv instead of the full title.* files
    #[arg(long)]
    small: bool,

    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    queries: Option<PathBuf>,

    /// Match CONTAINS phrases case-insensitively
    #[arg(long)]
    ignore_case: bool,

    /// Leave out the "elapsed time" line after each command
    #[arg(long)]
    no_elapsed: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let dataset = if cli.small { Dataset::Small } else { Dataset::Full };
    let paths = DatasetPaths::new(&cli.data_dir, dataset);

    let start = Instant::now();
    let store = RecordStore::load(&paths)
        .with_context(|| format!("Failed to load dataset from {}", cli.data_dir.display()))?;
    info!("Loaded dataset in {:?}", start.elapsed());

    let options = QueryOptions {
        ignore_case: cli.ignore_case,
        ..QueryOptions::default()
    };
    let dispatcher = Dispatcher::new(&store).with_options(options);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let (movies, ratings) = store.counts();
    writeln!(out, "Total movies: {movies}")?;
    writeln!(out, "Total ratings: {ratings}")?;
    writeln!(out)?;

    let reader: Box<dyn BufRead> = match &cli.queries {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let processed = dispatcher
        .run_stream(reader, &mut out, !cli.no_elapsed)
        .context("Failed while processing commands")?;
    out.flush()?;

    info!("Processed {} commands", processed);
    Ok(())
}
