//! Core checking execution logic.
//!
//! This module contains `run_check`, which wires discovery, scanning and the
//! report writer together for one run.

use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use super::{
    helpers::{
        build_formatter, calculate_exit_code, describe_keywords, effective_output_dir,
        resolve_root
    },
    types::{CheckParams, CheckResult}
};
use crate::{
    config::Config,
    error::{AppResult, output_write_error},
    output::checking_message,
    pattern::PatternSet,
    report::ReportWriter,
    scan::{FileOutcome, ScanSummary, Scanner, discover_files}
};

/// Executes one complete checking run.
///
/// 1. **Discovery**: Collects every regular file under the root
/// 2. **Report**: Creates the timestamped report file
/// 3. **Scanning**: Matches each file's lines and formats the hits
/// 4. **Appending**: Writes each file's blocks, in discovery order
///
/// Discovery happens before the report is created, so the report is never
/// scanned by the run that writes it.
///
/// # Arguments
///
/// * `params` - Run parameters from the command line or the dialogue
/// * `config` - Application configuration
///
/// # Returns
///
/// A `CheckResult` with the exit code, the report path and the summary.
///
/// # Errors
///
/// Returns an error if:
/// - The keyword configuration is empty
/// - The root folder does not exist
/// - The report file cannot be created or written
///
/// Files that cannot be read are not errors; they are listed in the summary.
///
/// # Example
///
/// ```no_run
/// use sql_log_checker::{
///     app::{CheckParams, run_check},
///     cli::Format,
///     config::Config
/// };
///
/// let params = CheckParams {
///     root:        Some("/var/log/app".into()),
///     patterns:    "error".to_string(),
///     output_dir:  None,
///     keywords:    vec![],
///     where_split: None,
///     parallel:    false,
///     format:      Format::Text,
///     no_color:    true,
///     quiet:       true,
///     verbose:     false
/// };
/// let result = run_check(params, Config::default()).unwrap();
/// println!("{}", result.output_file.display());
/// ```
pub fn run_check(params: CheckParams, config: Config) -> AppResult<CheckResult> {
    let formatter = build_formatter(&params, &config)?;
    let patterns = PatternSet::parse(&params.patterns);
    let root = resolve_root(params.root.clone())?;
    tracing::debug!(
        root = %root.display(),
        patterns = patterns.len(),
        keywords = %describe_keywords(formatter.classifier()),
        "Starting check"
    );

    let discovery = discover_files(&root)?;
    let output_dir = effective_output_dir(params.output_dir.clone(), config.report.output_dir.clone());
    let (mut writer, output_file) = ReportWriter::create(&output_dir, &config.report.suffix)?;

    let mut summary = ScanSummary {
        output_file: Some(output_file.clone()),
        files_discovered: discovery.files.len(),
        discovery_warnings: discovery.warnings,
        ..Default::default()
    };

    let spinner = if params.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let scanner = Scanner::new(patterns, formatter);
    let announce = |path: &Path| {
        if !params.quiet {
            spinner.suspend(|| println!("{}", checking_message(path)));
        }
    };
    let mut record = |outcome: FileOutcome| -> AppResult<()> {
        match outcome {
            Ok(report) => {
                writer
                    .write_file(&report)
                    .map_err(|e| output_write_error(&output_file.display().to_string(), e))?;
                summary.record(&report);
            }
            Err(failed) => summary.record_failure(failed)
        }
        Ok(())
    };

    if params.parallel || config.report.parallel {
        spinner.set_message(format!("Scanning {} files...", discovery.files.len()));
        let outcomes = scanner.scan_files_parallel(&discovery.files);
        for (path, outcome) in discovery.files.iter().zip(outcomes) {
            announce(path.as_path());
            record(outcome)?;
        }
    } else {
        scanner.scan_each(
            &discovery.files,
            |path| {
                spinner.set_message(path.display().to_string());
                announce(path);
            },
            |_, outcome| record(outcome)
        )?;
    }
    spinner.finish_and_clear();

    writer
        .finish()
        .map_err(|e| output_write_error(&output_file.display().to_string(), e))?;

    let exit_code = calculate_exit_code(&summary);
    tracing::debug!(
        scanned = summary.files_scanned,
        failed = summary.failed_files.len(),
        matched = summary.lines_matched,
        "Check finished"
    );
    Ok(CheckResult {
        exit_code,
        output_file,
        summary
    })
}
