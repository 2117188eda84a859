use std::path::Path;

use colored::Colorize;

use crate::scan::ScanSummary;

/// Output format for the end-of-run summary
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Output options
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format:  OutputFormat,
    pub colored: bool,
    pub verbose: bool
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true,
            verbose: false
        }
    }
}

/// Status line printed before a file is scanned
pub fn checking_message(path: &Path) -> String {
    format!("Checking file {}", path.display())
}

/// Final line naming the report
pub fn completion_message(report_name: &str) -> String {
    format!("Checking done! Open {} to view result", report_name)
}

/// Format the run summary based on output options
pub fn format_summary(summary: &ScanSummary, opts: &OutputOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(summary).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(summary).unwrap_or_default(),
        OutputFormat::Text => format_text_summary(summary, opts)
    }
}

fn format_text_summary(summary: &ScanSummary, opts: &OutputOptions) -> String {
    let mut output = String::new();
    let title = "=== Scan Summary ===";
    if opts.colored {
        output.push_str(&title.bold().to_string());
    } else {
        output.push_str(title);
    }
    output.push('\n');

    output.push_str(&format!(
        "Files: {} scanned, {} with matches, {} failed\n",
        summary.files_scanned,
        summary.files_with_matches,
        summary.failed_files.len()
    ));
    output.push_str(&format!(
        "Lines: {} read, {} matched\n",
        summary.lines_read, summary.lines_matched
    ));
    output.push_str(&format!(
        "SQL statements rebuilt: {}\n",
        summary.sql_reconstructed
    ));

    let diagnostics = [
        ("Malformed SQL lines", summary.malformed_sql_lines),
        ("Parameter mismatches", summary.parameter_mismatches)
    ];
    for (label, count) in diagnostics {
        let line = format!("{}: {}", label, count);
        if opts.colored && count > 0 {
            output.push_str(&line.yellow().to_string());
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }

    if opts.verbose {
        for failed in &summary.failed_files {
            let line = format!("FAILED {}: {}", failed.path.display(), failed.reason);
            if opts.colored {
                output.push_str(&line.red().to_string());
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }
        for warning in &summary.discovery_warnings {
            let line = format!("SKIPPED {}", warning);
            if opts.colored {
                output.push_str(&line.yellow().to_string());
            } else {
                output.push_str(&line);
            }
            output.push('\n');
        }
    }

    output
}
