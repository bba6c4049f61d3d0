use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pdfsift::{PipelineConfig, run};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Batch PDF ingestion: extract, summarize, keyword-score and persist",
    long_about = None
)]
struct Args {
    /// Directory containing the PDFs to process
    dir: Option<PathBuf>,

    /// Path to the SQLite document store
    #[arg(long)]
    db: Option<PathBuf>,

    /// Sentences per summary
    #[arg(short = 's', long)]
    sentences: Option<usize>,

    /// Keywords per document
    #[arg(short = 'k', long)]
    keywords: Option<usize>,

    /// Minimum keyword token length
    #[arg(long)]
    min_token_len: Option<usize>,

    /// Worker pool size (defaults to available parallelism)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Path to the append-only error log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = PipelineConfig::load_from_file().unwrap_or_default();

    // 2. Override with CLI args
    if let Some(dir) = args.dir {
        config.source_dir = dir;
    }
    if let Some(db) = args.db {
        config.db_path = db;
    }
    if let Some(s) = args.sentences {
        config.summary_sentences = s;
    }
    if let Some(k) = args.keywords {
        config.keyword_count = k;
    }
    if let Some(l) = args.min_token_len {
        config.min_token_len = l;
    }
    if let Some(j) = args.jobs {
        config.jobs = Some(j);
    }
    if let Some(log_file) = args.log_file {
        config.log_file = log_file;
    }
    if args.verbose {
        config.verbose = true;
    }

    pdfsift::logging::init(&config.log_file);

    if let Some(jobs) = config.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .map_err(|e| anyhow::anyhow!("failed to size worker pool: {e}"))?;
    }

    // A missing source directory aborts with a non-zero exit; per-file
    // failures are contained inside the batch and leave the exit code 0.
    run(config)
}
