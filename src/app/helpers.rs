//! Helper functions for CLI operations.
//!
//! This module provides the small decisions a run is made of: resolving the
//! folders, merging CLI and configuration settings into a formatter, and
//! turning the scan summary into an exit code.

use std::{
    env,
    path::{Path, PathBuf}
};

use super::{
    convert::{convert_format, convert_where_split},
    types::CheckParams
};
use crate::{
    cli::Format,
    config::Config,
    error::{AppResult, discovery_error},
    format::LineFormatter,
    output::OutputOptions,
    scan::ScanSummary,
    sql::SqlClassifier
};

/// Exit code when every discovered file failed to read
pub const EXIT_TOTAL_FAILURE: i32 = 2;

/// Calculates the process exit code from the scan summary.
///
/// - `0` - The run completed, even if some files were skipped
/// - `2` - Files were discovered but none of them could be read
///
/// Fatal errors never reach this point; `main` maps them to `1`.
///
/// # Example
///
/// ```
/// use sql_log_checker::{app::calculate_exit_code, scan::ScanSummary};
///
/// assert_eq!(calculate_exit_code(&ScanSummary::default()), 0);
/// ```
pub fn calculate_exit_code(summary: &ScanSummary) -> i32 {
    if summary.is_total_failure() {
        EXIT_TOTAL_FAILURE
    } else {
        0
    }
}

/// Resolves the folder to scan.
///
/// # Arguments
///
/// * `root` - Folder given by the user, if any
///
/// # Returns
///
/// The given folder, or the current working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn resolve_root(root: Option<PathBuf>) -> AppResult<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => env::current_dir().map_err(|e| discovery_error(".", e.to_string()))
    }
}

/// Gets the effective report folder.
///
/// Resolves in order of precedence:
/// 1. Folder given on the command line
/// 2. Folder from configuration (file or environment)
/// 3. Current directory
pub fn effective_output_dir(cli_dir: Option<PathBuf>, config_dir: Option<PathBuf>) -> PathBuf {
    cli_dir
        .or(config_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Builds the line formatter for a run.
///
/// Keywords given on the command line replace the configured list; the WHERE
/// split mode from the command line overrides the configured one.
///
/// # Errors
///
/// Returns a config error if the resulting keyword list is empty.
pub fn build_formatter(params: &CheckParams, config: &Config) -> AppResult<LineFormatter> {
    let classifier = if params.keywords.is_empty() {
        config.classifier()?
    } else {
        let mut config = config.clone();
        config.sql.keywords = params.keywords.clone();
        config.classifier()?
    };
    let where_split = params
        .where_split
        .map(convert_where_split)
        .unwrap_or(config.sql.where_split);
    Ok(LineFormatter::new(classifier, where_split))
}

/// Creates output options from CLI parameters.
pub fn create_output_options(format: Format, no_color: bool, verbose: bool) -> OutputOptions {
    OutputOptions {
        format: convert_format(format),
        colored: !no_color,
        verbose
    }
}

/// Name shown to the user for the report file.
pub fn report_display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Keywords in effect for a formatter, for diagnostics.
pub fn describe_keywords(classifier: &SqlClassifier) -> String {
    classifier.keywords().collect::<Vec<_>>().join(", ")
}
