//! Application types for CLI commands.
//!
//! This module defines the data structures passed between the CLI layer and
//! the scanning pipeline: the parameters of one run and its result.

use std::path::PathBuf;

use crate::{
    cli::{Format, RunOptions, WhereSplitArg},
    scan::ScanSummary
};

/// Parameters for one checking run.
///
/// Built from the `check` arguments or from the answers of the
/// `interactive` dialogue.
///
/// # Example
///
/// ```
/// use sql_log_checker::{app::CheckParams, cli::Format};
///
/// let params = CheckParams {
///     root:        Some("/var/log/app".into()),
///     patterns:    "error,timeout".to_string(),
///     output_dir:  None,
///     keywords:    vec![],
///     where_split: None,
///     parallel:    false,
///     format:      Format::Text,
///     no_color:    true,
///     quiet:       true,
///     verbose:     false
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CheckParams {
    /// Folder to scan; current directory when `None`.
    pub root:        Option<PathBuf>,
    /// Comma-separated pattern list as typed by the user.
    pub patterns:    String,
    /// Folder for the report; falls back to config, then current directory.
    pub output_dir:  Option<PathBuf>,
    /// Statement keywords overriding the configured list when non-empty.
    pub keywords:    Vec<String>,
    /// WHERE split mode overriding the configured one.
    pub where_split: Option<WhereSplitArg>,
    /// Scan files in parallel.
    pub parallel:    bool,
    /// Format of the end-of-run summary.
    pub format:      Format,
    /// Disable colored terminal output.
    pub no_color:    bool,
    /// Suppress per-file status lines and the spinner.
    pub quiet:       bool,
    /// Include failed files and warnings in the summary.
    pub verbose:     bool
}

impl CheckParams {
    /// Combine a root, a pattern list and the shared options.
    pub fn from_options(root: Option<PathBuf>, patterns: String, options: RunOptions) -> Self {
        Self {
            root,
            patterns,
            output_dir: options.output_dir,
            keywords: options.keywords,
            where_split: options.where_split,
            parallel: options.parallel,
            format: options.format,
            no_color: options.no_color,
            quiet: options.quiet,
            verbose: options.verbose
        }
    }
}

/// Result of a checking run.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Process exit code (0 = done, 2 = every file failed).
    pub exit_code:   i32,
    /// Path of the report that was written.
    pub output_file: PathBuf,
    /// Totals and diagnostics of the run.
    pub summary:     ScanSummary
}
