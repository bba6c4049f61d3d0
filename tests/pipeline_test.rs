use std::fs;
use std::path::Path;

use pdfsift::{
    DocumentStore, Extract, PipelineConfig, PipelineError, PipelineEvent, list_candidates,
    run_batch,
};
use tempfile::TempDir;

/// Stands in for the PDF backend so batches can run over plain-text
/// fixtures; unreadable files come back empty, like a failed extraction.
struct PlainTextExtractor;

impl Extract for PlainTextExtractor {
    fn extract(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }
}

fn config_for(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        source_dir: dir.to_path_buf(),
        ..Default::default()
    }
}

#[test]
fn test_batch_over_three_documents() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    // Three candidates of exactly 100, 200 and 300 bytes.
    fs::write(root.join("a.pdf"), "x".repeat(100))?;
    fs::write(root.join("b.pdf"), "y".repeat(200))?;
    fs::write(root.join("c.pdf"), "z".repeat(300))?;

    let store = DocumentStore::in_memory()?;
    let report = run_batch(&config_for(root), &PlainTextExtractor, &store, None)?;

    assert_eq!(report.processed, 3);
    assert_eq!(report.failed, 0);
    assert_eq!(report.total_size_bytes, 600);
    assert_eq!(report.average_size_bytes(), 200.0);

    assert_eq!(store.count()?, 3);
    assert_eq!(store.average_size_bytes()?, 200.0);
    Ok(())
}

#[test]
fn test_blank_document_counts_as_failure() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("good.pdf"), "A real document. With two sentences.")?;
    fs::write(root.join("blank.pdf"), "   \n\t")?;

    let store = DocumentStore::in_memory()?;
    let report = run_batch(&config_for(root), &PlainTextExtractor, &store, None)?;

    assert_eq!(report.processed, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(store.count()?, 1);
    Ok(())
}

#[test]
fn test_missing_directory_aborts_without_store_writes() -> anyhow::Result<()> {
    let store = DocumentStore::in_memory()?;
    let config = config_for(Path::new("definitely_missing_dir_xyz"));

    let err = run_batch(&config, &PlainTextExtractor, &store, None).unwrap_err();
    assert!(matches!(err, PipelineError::DirectoryNotFound(_)));
    assert_eq!(store.count()?, 0);
    Ok(())
}

#[test]
fn test_directory_without_pdfs_completes_empty() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("notes.txt"), "not a candidate")?;
    fs::write(root.join("data.csv"), "also,not,one")?;

    assert!(list_candidates(root)?.is_empty());

    let store = DocumentStore::in_memory()?;
    let report = run_batch(&config_for(root), &PlainTextExtractor, &store, None)?;

    assert_eq!(report.processed, 0);
    assert_eq!(report.failed, 0);
    assert_eq!(store.count()?, 0);
    Ok(())
}

#[test]
fn test_every_candidate_is_accounted_for() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("one.pdf"), "Readable text here.")?;
    fs::write(root.join("two.pdf"), "")?;
    fs::write(root.join("three.pdf"), "More readable text.")?;
    fs::write(root.join("four.pdf"), "  ")?;
    fs::write(root.join("skip.txt"), "not counted at all")?;

    let candidates = list_candidates(root)?;
    let store = DocumentStore::in_memory()?;
    let report = run_batch(&config_for(root), &PlainTextExtractor, &store, None)?;

    assert_eq!(report.processed + report.failed, candidates.len());
    assert_eq!(report.processed, 2);
    assert_eq!(report.failed, 2);
    Ok(())
}

#[test]
fn test_repeated_runs_report_identical_statistics() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("a.pdf"), "Stable content, run after run.")?;
    fs::write(root.join("b.pdf"), "")?;

    let config = config_for(root);

    let store = DocumentStore::in_memory()?;
    let first = run_batch(&config, &PlainTextExtractor, &store, None)?;
    let second = run_batch(&config, &PlainTextExtractor, &store, None)?;

    assert_eq!(first, second);
    // The store keeps accumulating; only the per-run statistics reset.
    assert_eq!(store.count()?, 2);
    Ok(())
}

#[test]
fn test_events_track_per_file_outcomes() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("good.pdf"), "Something worth keeping.")?;
    fs::write(root.join("bad.pdf"), "")?;

    let store = DocumentStore::in_memory()?;
    let (tx, rx) = crossbeam_channel::unbounded();
    run_batch(&config_for(root), &PlainTextExtractor, &store, Some(tx))?;

    let events: Vec<PipelineEvent> = rx.into_iter().collect();
    let found = events
        .iter()
        .find_map(|e| match e {
            PipelineEvent::CandidatesFound(n) => Some(*n),
            _ => None,
        })
        .expect("CandidatesFound event missing");
    let stored = events
        .iter()
        .filter(|e| matches!(e, PipelineEvent::DocumentStored(_)))
        .count();
    let failed = events
        .iter()
        .filter(|e| matches!(e, PipelineEvent::DocumentFailed(_)))
        .count();

    assert_eq!(found, 2);
    assert_eq!(stored, 1);
    assert_eq!(failed, 1);
    Ok(())
}

#[test]
fn test_persisted_artifacts_are_derived_from_content() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(
        root.join("doc.pdf"),
        "Rust pipelines process documents quickly. Rust batches scale well.",
    )?;

    let store = DocumentStore::in_memory()?;
    let config = config_for(root);
    let record_size = pdfsift::process_one(
        &root.join("doc.pdf"),
        &PlainTextExtractor,
        &store,
        &config,
    )?;

    assert!(record_size > 0);
    assert_eq!(store.count()?, 1);
    Ok(())
}
