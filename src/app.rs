//! Application logic for the SQL Log Checker CLI.
//!
//! This module contains the run orchestration separated from the main entry
//! point to enable testing.

mod check;
mod convert;
mod helpers;
mod types;

pub use check::run_check;
pub use convert::{convert_format, convert_where_split};
pub use helpers::{
    EXIT_TOTAL_FAILURE, build_formatter, calculate_exit_code, create_output_options,
    describe_keywords, effective_output_dir, report_display_name, resolve_root
};
pub use types::{CheckParams, CheckResult};
