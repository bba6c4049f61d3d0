//! Run and store-side reporting.

use std::fmt;

/// Final statistics for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunReport {
    /// Files extracted, analyzed and persisted successfully
    pub processed: usize,
    /// Files that failed at any pipeline stage
    pub failed: usize,
    /// Combined size of successfully processed files
    pub total_size_bytes: u64,
}

impl RunReport {
    /// Average size of a processed file; 0.0 when nothing was processed.
    pub fn average_size_bytes(&self) -> f64 {
        if self.processed == 0 {
            0.0
        } else {
            self.total_size_bytes as f64 / self.processed as f64
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--------- PDF Processing Report ---------")?;
        writeln!(f, "Total PDFs processed: {}", self.processed)?;
        writeln!(f, "Total PDFs failed: {}", self.failed)?;
        writeln!(
            f,
            "Total file size processed: {:.2} KB",
            self.total_size_bytes as f64 / 1024.0
        )?;
        writeln!(
            f,
            "Average file size: {:.2} KB",
            self.average_size_bytes() / 1024.0
        )?;
        write!(f, "-----------------------------------------")
    }
}

/// Aggregate view of the document store, queried after the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoreSummary {
    pub documents: u64,
    pub average_size_bytes: f64,
}

impl fmt::Display for StoreSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--------- Document Store Summary ---------")?;
        writeln!(f, "Total documents stored: {}", self.documents)?;
        writeln!(
            f,
            "Average stored file size: {:.2} KB",
            self.average_size_bytes / 1024.0
        )?;
        write!(f, "-------------------------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_without_processed_files() {
        let report = RunReport {
            processed: 0,
            failed: 4,
            total_size_bytes: 0,
        };
        assert_eq!(report.average_size_bytes(), 0.0);
    }

    #[test]
    fn test_average() {
        let report = RunReport {
            processed: 3,
            failed: 0,
            total_size_bytes: 600,
        };
        assert_eq!(report.average_size_bytes(), 200.0);
    }

    #[test]
    fn test_display_contains_counts() {
        let report = RunReport {
            processed: 2,
            failed: 1,
            total_size_bytes: 2048,
        };
        let rendered = report.to_string();
        assert!(rendered.contains("Total PDFs processed: 2"));
        assert!(rendered.contains("Total PDFs failed: 1"));
        assert!(rendered.contains("2.00 KB"));
    }
}
