//! Type conversion functions for CLI to internal types.
//!
//! This module translates CLI-facing enums (from the `cli` module) into the
//! domain types used by the formatter and the console output.

use crate::{
    cli::{Format, WhereSplitArg},
    format::WhereSplit,
    output::OutputFormat
};

/// Converts a CLI WHERE split choice to the formatter setting.
///
/// # Example
///
/// ```
/// use sql_log_checker::{app::convert_where_split, cli::WhereSplitArg, format::WhereSplit};
///
/// assert_eq!(convert_where_split(WhereSplitArg::Always), WhereSplit::Always);
/// ```
pub fn convert_where_split(arg: WhereSplitArg) -> WhereSplit {
    match arg {
        WhereSplitArg::SqlOnly => WhereSplit::SqlOnly,
        WhereSplitArg::Always => WhereSplit::Always,
        WhereSplitArg::Never => WhereSplit::Never
    }
}

/// Converts a CLI format enum to the internal output format type.
///
/// # Example
///
/// ```
/// use sql_log_checker::{app::convert_format, cli::Format, output::OutputFormat};
///
/// assert!(matches!(convert_format(Format::Json), OutputFormat::Json));
/// ```
pub fn convert_format(format: Format) -> OutputFormat {
    match format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
        Format::Yaml => OutputFormat::Yaml
    }
}
