use std::path::Path;

/// Source of raw document text.
///
/// The batch runner only sees this seam, so tests can substitute a
/// plain-text reader for the PDF backend.
pub trait Extract: Sync {
    /// Returns the full text of the document at `path`.
    ///
    /// Never fails past this boundary: open and parse errors are logged
    /// and reported as an empty string, which the runner treats as an
    /// empty document.
    fn extract(&self, path: &Path) -> String;
}

/// Text extraction backed by `pdf-extract`.
///
/// Page texts arrive already concatenated; page-level extraction quirks
/// (scanned pages, broken encodings) are the library's concern and must
/// not crash the run.
pub struct PdfTextExtractor;

impl Extract for PdfTextExtractor {
    fn extract(&self, path: &Path) -> String {
        match pdf_extract::extract_text(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::error!("Error reading PDF {}: {err}", path.display());
                String::new()
            }
        }
    }
}
