//! Batch result types: one record per attempted entry, aggregated into a
//! report that the CLI renders as summary statistics plus a per-file table.

use crate::info;
use crate::utils::format_size;

/// Outcome record for a single input entry.
#[derive(Debug, Clone)]
pub struct FileResult {
    /// Basename of the resolved path.
    pub filename: String,
    /// Byte length before processing; 0 when the file was missing.
    pub original_size: u64,
    /// Byte length after a successful replace; 0 when nothing was written.
    pub new_size: u64,
    pub success: bool,
    pub message: String,
}

/// How one entry went. Folded into the report by [`BatchReport::record`]
/// so per-file control flow stays a value, not an exception path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Success { original_size: u64, new_size: u64 },
    Skipped { original_size: u64, reason: String },
    Failed { original_size: u64, reason: String },
}

/// Aggregated result of one batch invocation.
///
/// Totals sum only over attempted entries: `total_original_size` over
/// everything in `processed_files`, `total_new_size` over the successful
/// ones. Skipped entries keep their size in the per-file record for display
/// but contribute to neither total.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub processed_files: Vec<FileResult>,
    pub skipped_files: Vec<FileResult>,
    pub total_original_size: u64,
    pub total_new_size: u64,
}

impl BatchReport {
    pub fn record(&mut self, filename: String, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::Success {
                original_size,
                new_size,
            } => {
                self.total_original_size += original_size;
                self.total_new_size += new_size;
                let message = format!(
                    "ok: {} -> {}",
                    format_size(original_size),
                    format_size(new_size)
                );
                self.processed_files.push(FileResult {
                    filename,
                    original_size,
                    new_size,
                    success: true,
                    message,
                });
            }
            EntryOutcome::Failed {
                original_size,
                reason,
            } => {
                self.total_original_size += original_size;
                self.processed_files.push(FileResult {
                    filename,
                    original_size,
                    new_size: 0,
                    success: false,
                    message: reason,
                });
            }
            EntryOutcome::Skipped {
                original_size,
                reason,
            } => {
                self.skipped_files.push(FileResult {
                    filename,
                    original_size,
                    new_size: 0,
                    success: false,
                    message: reason,
                });
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.processed_files.is_empty() && self.skipped_files.is_empty()
    }

    pub fn success_count(&self) -> usize {
        self.processed_files.iter().filter(|f| f.success).count()
    }

    pub fn failure_count(&self) -> usize {
        self.processed_files.len() - self.success_count()
    }

    pub fn bytes_saved(&self) -> u64 {
        self.total_original_size.saturating_sub(self.total_new_size)
    }

    /// Percentage saved over attempted entries, 0 when nothing was attempted.
    pub fn percent_saved(&self) -> f64 {
        if self.total_original_size == 0 {
            return 0.0;
        }
        (1.0 - self.total_new_size as f64 / self.total_original_size as f64) * 100.0
    }

    /// Print summary statistics and the per-file table.
    pub fn print_summary(&self) {
        info!("\n📊 Re-export summary:");
        info!("  📁 Processed files: {}", self.processed_files.len());
        info!("  ⏭️  Skipped files: {}", self.skipped_files.len());
        info!(
            "  📊 Total original size: {}",
            format_size(self.total_original_size)
        );
        info!("  📊 Total new size: {}", format_size(self.total_new_size));
        info!(
            "  💾 Saved: {} ({:.2}%)",
            format_size(self.bytes_saved()),
            self.percent_saved()
        );
        if self.failure_count() > 0 {
            info!("  ❌ Failed files: {}", self.failure_count());
        }

        if !self.processed_files.is_empty() {
            info!(
                "\n  {:<32} {:>12} {:>12} {:>12}  status",
                "file", "original", "new", "saved"
            );
            for file in &self.processed_files {
                let saved = file.original_size.saturating_sub(file.new_size);
                info!(
                    "  {:<32} {:>12} {:>12} {:>12}  {}",
                    file.filename,
                    format_size(file.original_size),
                    format_size(file.new_size),
                    format_size(saved),
                    file.message
                );
            }
        }

        if !self.skipped_files.is_empty() {
            info!("\n⚠️  Skipped:");
            for file in &self.skipped_files {
                info!("  {}: {}", file.filename, file.message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_success_updates_both_totals() {
        let mut report = BatchReport::default();
        report.record(
            "a.png".to_string(),
            EntryOutcome::Success {
                original_size: 1000,
                new_size: 600,
            },
        );

        assert_eq!(report.processed_files.len(), 1);
        assert_eq!(report.total_original_size, 1000);
        assert_eq!(report.total_new_size, 600);
        let result = &report.processed_files[0];
        assert!(result.success);
        assert_eq!(result.new_size, 600);
        assert!(result.message.contains("ok"));
    }

    #[test]
    fn test_record_failed_counts_original_only() {
        let mut report = BatchReport::default();
        report.record(
            "bad.png".to_string(),
            EntryOutcome::Failed {
                original_size: 500,
                reason: "decode error".to_string(),
            },
        );

        assert_eq!(report.processed_files.len(), 1);
        assert_eq!(report.total_original_size, 500);
        assert_eq!(report.total_new_size, 0);
        assert!(!report.processed_files[0].success);
        assert_eq!(report.processed_files[0].new_size, 0);
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn test_record_skipped_counts_nothing() {
        let mut report = BatchReport::default();
        report.record(
            "c.gif".to_string(),
            EntryOutcome::Skipped {
                original_size: 700,
                reason: "unsupported format: c.gif".to_string(),
            },
        );

        assert!(report.processed_files.is_empty());
        assert_eq!(report.skipped_files.len(), 1);
        assert_eq!(report.total_original_size, 0);
        assert_eq!(report.total_new_size, 0);
        assert_eq!(report.skipped_files[0].original_size, 700);
    }

    #[test]
    fn test_percent_saved() {
        let mut report = BatchReport::default();
        report.record(
            "a.png".to_string(),
            EntryOutcome::Success {
                original_size: 1000,
                new_size: 750,
            },
        );
        assert!((report.percent_saved() - 25.0).abs() < 1e-9);
        assert_eq!(report.bytes_saved(), 250);
    }

    #[test]
    fn test_percent_saved_empty_report() {
        let report = BatchReport::default();
        assert!(report.is_empty());
        assert_eq!(report.percent_saved(), 0.0);
        assert_eq!(report.bytes_saved(), 0);
    }
}
