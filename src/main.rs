//! # SQL Log Checker
//!
//! Find log lines that contain every given pattern and make logged SQL
//! readable.
//!
//! `sql-log-checker` walks a folder recursively, reads every file as
//! ISO-8859-1 text (so binary or oddly encoded files never abort the scan)
//! and writes each line containing all patterns, case-insensitively, into a
//! timestamped report. Lines that log a SQL statement together with its bind
//! parameters are rebuilt with the parameters substituted into the `?`
//! placeholders.
//!
//! # Quick Start
//!
//! ```bash
//! # Every line mentioning both "error" and "timeout" under /var/log/app
//! sql-log-checker check /var/log/app -p "error,timeout"
//!
//! # Every line of every file in the current folder
//! sql-log-checker check
//!
//! # Ask for the folder and patterns like the classic console tool
//! sql-log-checker interactive
//! ```
//!
//! # SQL Reconstruction
//!
//! A line is treated as logged SQL when it contains `UPDATE`, `SELECT` or
//! `DELETE FROM` (checked in that order) and the marker `params`:
//!
//! ```text
//! [2024-01-01 10:00:00] SELECT * FROM t WHERE id=? AND name=? [params=42, Bob]
//! ```
//!
//! becomes
//!
//! ```text
//! line: 17
//! [2024-01-01 10:00:00]
//! SELECT * FROM t
//! WHERE id=42 AND name=Bob
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded from (in order of precedence):
//!
//! 1. Command-line arguments
//! 2. Environment variables (`SQL_LOG_CHECKER_KEYWORDS`, ...)
//! 3. `.sql-log-checker.toml` in current directory
//! 4. `~/.config/sql-log-checker/config.toml`
//!
//! # Exit Codes
//!
//! - `0` - Done, even if some files could not be read
//! - `1` - Fatal error (configuration, missing folder, report not writable)
//! - `2` - No discovered file could be read

use std::{io, process};

use clap::Parser;
use sql_log_checker::{
    app::{CheckParams, create_output_options, report_display_name, run_check},
    cli::{Cli, Commands},
    config::Config,
    error::AppResult,
    logging,
    output::{completion_message, format_summary},
    prompt::ask
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let params = match cli.command {
        Commands::Check {
            root,
            patterns,
            options
        } => {
            logging::init(options.debug, config.logging.level.as_deref());
            CheckParams::from_options(root, patterns, options)
        }
        Commands::Interactive {
            options
        } => {
            logging::init(options.debug, config.logging.level.as_deref());
            let answers = ask(&mut io::stdin().lock(), &mut io::stdout())?;
            CheckParams::from_options(answers.root, answers.patterns, options)
        }
    };

    let output_opts = create_output_options(params.format, params.no_color, params.verbose);
    let result = run_check(params, config)?;

    println!(
        "{}",
        completion_message(&report_display_name(&result.output_file))
    );
    println!("{}", format_summary(&result.summary, &output_opts));

    Ok(result.exit_code)
}
