mod config;
mod files;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use neardup::Collector;

use config::Config;
use files::{DirectorySink, FileSource};

#[derive(Parser, Debug)]
#[clap(
    name = "neardup",
    about = "A program to detect near-duplicate documents with SimHash fingerprints."
)]
struct Args {
    /// File paths to documents to be compared pairwise (at least two are needed).
    #[clap(required = true)]
    documents: Vec<PathBuf>,

    /// TOML configuration file. Command line options take precedence over it.
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory to write the normalized text of each document into.
    #[clap(short = 'o', long)]
    output_dir: Option<PathBuf>,

    /// Writes into a subdirectory of the output directory named after the current time.
    #[clap(long)]
    timestamped: bool,

    /// Seed value for hashing features.
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// Folds features to lowercase.
    #[clap(long)]
    lowercase: bool,

    /// Only reports pairs whose normalized Hamming distance is within this radius in [0,1].
    #[clap(short = 'r', long)]
    radius: Option<f64>,

    /// Disables parallel fingerprinting.
    #[clap(short = 'p', long)]
    disable_parallel: bool,

    /// Log level, e.g., "info" or "debug". Overrides RUST_LOG.
    #[clap(short = 'l', long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if args.seed.is_some() {
        config.features.seed = args.seed;
    }
    if args.lowercase {
        config.features.lowercase = true;
    }
    if let Some(dir) = &args.output_dir {
        config.output.directory = Some(dir.clone());
    }
    if args.timestamped {
        config.output.timestamped = true;
    }
    if let Some(level) = &args.log_level {
        config.logging.level = Some(level.clone());
    }

    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = &config.logging.level {
        builder.parse_filters(level);
    }
    builder.init();

    let fingerprinter = config.fingerprinter();
    let sink = match &config.output.directory {
        Some(base) => {
            let dir = files::output_dir(base, config.output.timestamped, &chrono::Local::now());
            let sink = DirectorySink::create(&dir)
                .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
            log::info!("Writing normalized text into {}", sink.dir().display());
            Some(sink)
        }
        None => None,
    };

    let mut collector = Collector::new(&fingerprinter).in_parallel(!args.disable_parallel);
    if let Some(sink) = &sink {
        collector = collector.sink(sink);
    }
    let ids: Vec<_> = args
        .documents
        .iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect();
    let collection = collector.collect(&FileSource, &ids);

    let results = match args.radius {
        Some(radius) => collection.similar_pairs(radius)?,
        None => collection.compare_all()?,
    };
    print!("{}", report::render(&collection, &results));

    Ok(())
}
