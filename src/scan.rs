//! File scanning: discovery, line reading and per-file matching.
//!
//! ```text
//! ┌───────────┐   ┌──────────────┐   ┌────────────┐   ┌───────────────┐
//! │ discovery │──▶│ latin1 lines │──▶│ PatternSet │──▶│ LineFormatter │
//! └───────────┘   └──────────────┘   └────────────┘   └───────────────┘
//! ```
//!
//! A file that cannot be read is reported as a [`FailedFile`] and never stops
//! the files after it.

mod discovery;
mod lines;
mod types;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf}
};

pub use discovery::{Discovery, discover_files};
pub use lines::{Latin1Lines, decode_latin1, latin1_lines};
use rayon::prelude::*;
pub use types::{FailedFile, FileReport, ScanSummary};

use crate::{format::LineFormatter, pattern::PatternSet};

/// Outcome of scanning one file
pub type FileOutcome = Result<FileReport, FailedFile>;

/// Applies a pattern set and a formatter to whole files.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    patterns:  PatternSet,
    formatter: LineFormatter
}

impl Scanner {
    pub fn new(patterns: PatternSet, formatter: LineFormatter) -> Self {
        Self {
            patterns,
            formatter
        }
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Scan already opened input, attributing matches to `path`.
    ///
    /// Line numbers start at 1.
    ///
    /// # Errors
    ///
    /// Returns the first read error; lines before it are discarded with the
    /// rest of the file.
    pub fn scan_reader<R: BufRead>(&self, path: &Path, reader: R) -> io::Result<FileReport> {
        let mut report = FileReport::new(path.to_path_buf());
        for (index, line) in latin1_lines(reader).enumerate() {
            let line = line?;
            let line_number = index + 1;
            report.lines_read = line_number;
            if !self.patterns.matches(&line) {
                continue;
            }
            let block = self.formatter.format(line_number, &line);
            if let Some(reason) = block.malformed() {
                tracing::debug!(
                    file = %path.display(),
                    line = line_number,
                    %reason,
                    "Malformed SQL line kept raw"
                );
            }
            if let Some(mismatch) = block.mismatch() {
                tracing::debug!(
                    file = %path.display(),
                    line = line_number,
                    %mismatch,
                    "Parameter count mismatch"
                );
            }
            report.blocks.push(block);
        }
        Ok(report)
    }

    /// Open and scan one file.
    pub fn scan_file(&self, path: &Path) -> FileOutcome {
        let result = File::open(path).and_then(|file| self.scan_reader(path, BufReader::new(file)));
        result.map_err(|e| {
            tracing::warn!(file = %path.display(), error = %e, "Skipping unreadable file");
            FailedFile {
                path:   path.to_path_buf(),
                reason: e.to_string()
            }
        })
    }

    /// Scan files one after another.
    pub fn scan_files(&self, files: &[PathBuf]) -> Vec<FileOutcome> {
        files.iter().map(|path| self.scan_file(path)).collect()
    }

    /// Scan files one after another, handing each outcome to `after`.
    ///
    /// `before` runs for a path before the file is opened. Stops at the first
    /// error returned by `after`.
    pub fn scan_each<B, A, E>(
        &self,
        files: &[PathBuf],
        mut before: B,
        mut after: A
    ) -> Result<(), E>
    where
        B: FnMut(&Path),
        A: FnMut(&Path, FileOutcome) -> Result<(), E>
    {
        for path in files {
            before(path);
            after(path, self.scan_file(path))?;
        }
        Ok(())
    }

    /// Scan files on the rayon pool.
    ///
    /// Outcomes come back in the order of `files`.
    pub fn scan_files_parallel(&self, files: &[PathBuf]) -> Vec<FileOutcome> {
        files.par_iter().map(|path| self.scan_file(path)).collect()
    }
}
