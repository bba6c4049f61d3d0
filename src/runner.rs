use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use crossbeam_channel::Sender;
use rayon::prelude::*;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::extract::{Extract, PdfTextExtractor};
use crate::report::{RunReport, StoreSummary};
use crate::store::{DocumentRecord, DocumentStore};
use crate::text::{keywords, summarize};

/// Events emitted while a batch is running
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// Candidate listing has started
    Listing,
    /// Number of candidate PDFs discovered
    CandidatesFound(usize),
    /// A document was analyzed and persisted
    DocumentStored(PathBuf),
    /// A document failed at some pipeline stage
    DocumentFailed(PathBuf),
}

/// Concurrent accumulator for per-file outcomes.
///
/// Workers increment atomically, so the totals stay exact no matter how
/// the pool interleaves.
#[derive(Default)]
struct RunStats {
    processed: AtomicUsize,
    failed: AtomicUsize,
    total_size_bytes: AtomicU64,
}

impl RunStats {
    fn record_success(&self, size_bytes: u64) {
        self.processed.fetch_add(1, Ordering::Relaxed);
        self.total_size_bytes.fetch_add(size_bytes, Ordering::Relaxed);
    }

    fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> RunReport {
        RunReport {
            processed: self.processed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            total_size_bytes: self.total_size_bytes.load(Ordering::Relaxed),
        }
    }
}

/// Lists the candidate PDFs of `dir`, sorted by path.
///
/// The listing is flat (no recursion) and matches the `.pdf` extension
/// case-insensitively. Sorting makes dispatch order and reports
/// deterministic across platforms. Fails with `DirectoryNotFound` when
/// `dir` is missing or not a directory.
pub fn list_candidates(dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    if !dir.is_dir() {
        return Err(PipelineError::DirectoryNotFound(dir.to_path_buf()));
    }

    let entries =
        fs::read_dir(dir).map_err(|_| PipelineError::DirectoryNotFound(dir.to_path_buf()))?;

    let mut candidates = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if is_pdf && path.is_file() {
            candidates.push(path);
        }
    }

    candidates.sort();
    Ok(candidates)
}

/// Runs one file through the full pipeline: extract, validate, summarize,
/// extract keywords, persist. Returns the file size on success.
///
/// Every failure mode maps to a `PipelineError`; the caller decides how
/// to contain it.
pub fn process_one(
    path: &Path,
    extractor: &dyn Extract,
    store: &DocumentStore,
    config: &PipelineConfig,
) -> Result<u64, PipelineError> {
    let text = extractor.extract(path);
    if text.trim().is_empty() {
        return Err(PipelineError::EmptyDocument(path.to_path_buf()));
    }

    let summary = summarize(&text, config.summary_sentences);
    let doc_keywords = keywords(&text, config.keyword_count, config.min_token_len);

    let size_bytes = fs::metadata(path)
        .map_err(|source| PipelineError::Extraction {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let record = DocumentRecord {
        filename: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path: path.display().to_string(),
        size_bytes,
        content: text,
        summary,
        keywords: doc_keywords,
        ingested_at: Utc::now(),
    };

    store
        .insert(&record)
        .map_err(|source| PipelineError::Persistence {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(size_bytes)
}

/// Drives one full batch: list candidates, fan out `process_one` across
/// the worker pool, accumulate outcomes, return the final report.
///
/// The batch is best effort: every candidate is attempted, per-file
/// errors are logged and counted without aborting other work. Only a
/// missing source directory aborts the run.
pub fn run_batch(
    config: &PipelineConfig,
    extractor: &dyn Extract,
    store: &DocumentStore,
    tx: Option<Sender<PipelineEvent>>,
) -> Result<RunReport, PipelineError> {
    let notify = |event: PipelineEvent| {
        if let Some(ref tx) = tx {
            let _ = tx.send(event);
        }
    };

    notify(PipelineEvent::Listing);
    let candidates = list_candidates(&config.source_dir)?;
    notify(PipelineEvent::CandidatesFound(candidates.len()));

    let stats = RunStats::default();
    let stats_ref = &stats;
    let notify_ref = &notify;

    candidates.par_iter().for_each(|path| {
        match process_one(path, extractor, store, config) {
            Ok(size_bytes) => {
                stats_ref.record_success(size_bytes);
                tracing::info!("Stored metadata for {}", path.display());
                notify_ref(PipelineEvent::DocumentStored(path.clone()));
            }
            Err(err) => {
                stats_ref.record_failure();
                tracing::error!("Error processing {}: {err}", path.display());
                notify_ref(PipelineEvent::DocumentFailed(path.clone()));
            }
        }
    });

    Ok(stats.snapshot())
}

/// Main entry point for the pipeline in CLI mode.
///
/// Runs the batch on a background thread and consumes progress events on
/// the calling thread, then prints the run report, a live aggregate
/// query against the store, and the elapsed wall time.
pub fn run(config: PipelineConfig) -> Result<()> {
    let started = Instant::now();

    let store = DocumentStore::open(&config.db_path)
        .with_context(|| format!("Failed to open document store at {:?}", config.db_path))?;
    let extractor = PdfTextExtractor;

    let (tx, rx) = crossbeam_channel::unbounded();

    let outcome = std::thread::scope(|s| {
        let handle = {
            let config = &config;
            let store = &store;
            let extractor: &dyn Extract = &extractor;
            s.spawn(move || run_batch(config, extractor, store, Some(tx)))
        };

        // The sender lives inside the batch thread, so this loop ends
        // once the batch finishes.
        for event in rx {
            match event {
                PipelineEvent::Listing => {
                    if config.verbose {
                        println!("Listing candidates in {:?}...", config.source_dir);
                    }
                }
                PipelineEvent::CandidatesFound(n) => {
                    if config.verbose {
                        println!("Found {n} candidate PDFs.");
                    }
                }
                PipelineEvent::DocumentStored(path) => {
                    if config.verbose {
                        println!("Processed: {:?}", path);
                    }
                }
                PipelineEvent::DocumentFailed(path) => {
                    if config.verbose {
                        println!("Giving up on: {:?}", path);
                    }
                }
            }
        }

        handle.join()
    });

    let report = outcome
        .map_err(|_| anyhow::anyhow!("batch worker panicked"))?
        .context("batch aborted")?;

    println!("\n{report}");

    let summary = StoreSummary {
        documents: store.count().context("failed to query document count")?,
        average_size_bytes: store
            .average_size_bytes()
            .context("failed to query average document size")?,
    };
    println!("\n{summary}");

    println!(
        "\nProcessed {} candidates in {:.2}s",
        report.processed + report.failed,
        started.elapsed().as_secs_f64()
    );

    Ok(())
}
