//! # SQL Log Checker Library
//!
//! Multi-pattern log search with reconstruction of logged SQL statements.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod output;
pub mod pattern;
pub mod prompt;
pub mod report;
pub mod scan;
pub mod sql;
