//! Report file creation and appending.
//!
//! The report is named after the local time it was created at
//! (`dd-MM_HH-mm-ss` plus a suffix, `-output.txt` by default). Each file with
//! at least one match contributes a header with its path followed by its
//! blocks; files without matches leave no trace.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf}
};

use chrono::{Local, NaiveDateTime};

use crate::{
    error::{AppResult, output_create_error},
    format::LINE_BREAK,
    scan::FileReport
};

/// Appended to the timestamp to form the report file name
pub const DEFAULT_SUFFIX: &str = "-output.txt";

/// chrono format of the timestamp part of the report file name
pub const TIMESTAMP_FORMAT: &str = "%d-%m_%H-%M-%S";

/// Report file name for a given local time.
pub fn output_file_name(now: &NaiveDateTime, suffix: &str) -> String {
    format!("{}{}", now.format(TIMESTAMP_FORMAT), suffix)
}

/// Header written before the first block of a file.
pub fn file_header(path: &Path) -> String {
    format!("{LINE_BREAK}{LINE_BREAK}{}", path.display())
}

/// Appends per-file results to the report.
#[derive(Debug)]
pub struct ReportWriter<W: Write> {
    out: BufWriter<W>
}

impl ReportWriter<File> {
    /// Create a new timestamped report in `dir`.
    ///
    /// An existing file with the same name is truncated.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created. The run cannot go on
    /// without it.
    pub fn create(dir: &Path, suffix: &str) -> AppResult<(Self, PathBuf)> {
        let name = output_file_name(&Local::now().naive_local(), suffix);
        let path = dir.join(name);
        let file =
            File::create(&path).map_err(|e| output_create_error(&path.display().to_string(), e))?;
        tracing::debug!(report = %path.display(), "Report file created");
        Ok((Self::new(file), path))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            out: BufWriter::new(inner)
        }
    }

    /// Append one file's header and blocks, then flush.
    ///
    /// Does nothing for a file without matches.
    pub fn write_file(&mut self, report: &FileReport) -> io::Result<()> {
        if !report.has_matches() {
            return Ok(());
        }
        self.out.write_all(file_header(&report.path).as_bytes())?;
        for block in &report.blocks {
            self.out.write_all(block.text.as_bytes())?;
        }
        self.out.flush()
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        self.out.into_inner().map_err(|e| e.into_error())
    }
}
