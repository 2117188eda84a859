use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// SQL Log Checker - Find log lines matching all patterns and rebuild logged SQL
#[derive(Parser, Debug)]
#[command(name = "sql-log-checker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a folder for lines containing every pattern
    Check {
        /// Folder to scan recursively (defaults to the current directory)
        root: Option<PathBuf>,

        /// Comma-separated patterns, all required, case-insensitive
        #[arg(short, long, env = "SQL_LOG_CHECKER_PATTERNS", default_value = "")]
        patterns: String,

        #[command(flatten)]
        options: RunOptions
    },
    /// Ask for the folder and patterns on the console, then scan
    Interactive {
        #[command(flatten)]
        options: RunOptions
    }
}

/// Options shared by every scanning command
#[derive(Args, Debug, Clone, Default)]
pub struct RunOptions {
    /// Folder the report is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Statement keyword, highest priority first (repeatable)
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,

    /// Which report blocks get a line break before WHERE
    #[arg(long, value_enum)]
    pub where_split: Option<WhereSplitArg>,

    /// Scan files in parallel (report order is unchanged)
    #[arg(long)]
    pub parallel: bool,

    /// Format of the end-of-run summary
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: Format,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not print per-file progress
    #[arg(short, long)]
    pub quiet: bool,

    /// List failed files and warnings in the summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug diagnostics on stderr
    #[arg(long)]
    pub debug: bool
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WhereSplitArg {
    SqlOnly,
    Always,
    Never
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
    Yaml
}
