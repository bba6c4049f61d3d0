use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration for a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory containing the PDFs to process
    pub source_dir: PathBuf,
    /// Path to the SQLite document store
    pub db_path: PathBuf,
    /// Path to the append-only error log
    pub log_file: PathBuf,
    /// Number of sentences in each extractive summary
    pub summary_sentences: usize,
    /// Number of keywords extracted per document
    pub keyword_count: usize,
    /// Minimum token length considered during keyword extraction
    pub min_token_len: usize,
    /// Worker pool size; defaults to available hardware parallelism
    pub jobs: Option<usize>,
    /// Print per-file progress to stdout
    pub verbose: bool,
}

impl PipelineConfig {
    /// Attempts to load configuration from `pdfsift.toml` in the current directory.
    pub fn load_from_file() -> Option<Self> {
        std::fs::read_to_string("pdfsift.toml")
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            db_path: PathBuf::from("pdfsift.db"),
            log_file: PathBuf::from("pdfsift.log"),
            summary_sentences: 3,
            keyword_count: 5,
            min_token_len: 1,
            jobs: None,
            verbose: false,
        }
    }
}
