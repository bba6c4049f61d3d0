pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod report;
pub mod runner;
pub mod store;
pub mod text;

// Re-export key items for convenience
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use extract::{Extract, PdfTextExtractor};
pub use report::{RunReport, StoreSummary};
pub use runner::{PipelineEvent, list_candidates, process_one, run, run_batch};
pub use store::{DocumentRecord, DocumentStore};
