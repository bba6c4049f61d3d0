use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the ingestion pipeline.
///
/// Everything except `DirectoryNotFound` is a per-file failure. Per-file
/// errors are contained at the batch boundary: they are logged, counted,
/// and never abort other in-flight work.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source directory is missing or not a directory. Aborts the run.
    #[error("source directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// The file could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Extraction {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extraction produced no text (blank, scanned, or unparseable PDF).
    #[error("no text extracted from {0}")]
    EmptyDocument(PathBuf),

    /// The document store rejected the record.
    #[error("failed to persist {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
}
