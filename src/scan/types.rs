use std::path::PathBuf;

use serde::Serialize;

use crate::format::ReportBlock;

/// Matches found in one file, in line order.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path:       PathBuf,
    pub lines_read: usize,
    pub blocks:     Vec<ReportBlock>
}

impl FileReport {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lines_read: 0,
            blocks: Vec::new()
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.blocks.is_empty()
    }

    pub fn sql_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_sql()).count()
    }

    pub fn malformed_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.malformed().is_some())
            .count()
    }

    pub fn mismatch_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| b.mismatch().is_some())
            .count()
    }
}

/// File skipped because it could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path:   PathBuf,
    pub reason: String
}

/// Totals for a whole run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSummary {
    pub output_file:          Option<PathBuf>,
    pub files_discovered:     usize,
    pub files_scanned:        usize,
    pub files_with_matches:   usize,
    pub lines_read:           usize,
    pub lines_matched:        usize,
    pub sql_reconstructed:    usize,
    pub malformed_sql_lines:  usize,
    pub parameter_mismatches: usize,
    pub failed_files:         Vec<FailedFile>,
    pub discovery_warnings:   Vec<String>
}

impl ScanSummary {
    pub fn record(&mut self, report: &FileReport) {
        self.files_scanned += 1;
        if report.has_matches() {
            self.files_with_matches += 1;
        }
        self.lines_read += report.lines_read;
        self.lines_matched += report.blocks.len();
        self.sql_reconstructed += report.sql_count();
        self.malformed_sql_lines += report.malformed_count();
        self.parameter_mismatches += report.mismatch_count();
    }

    pub fn record_failure(&mut self, failed: FailedFile) {
        self.failed_files.push(failed);
    }

    /// Every discovered file failed to read.
    pub fn is_total_failure(&self) -> bool {
        self.files_discovered > 0 && self.failed_files.len() >= self.files_discovered
    }
}
