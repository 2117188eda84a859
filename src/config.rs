//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-log-checker.toml` in current directory
//! 4. `~/.config/sql-log-checker/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [sql]
//! keywords = ["UPDATE", "SELECT", "DELETE FROM"]   # priority order
//! where_split = "sql-only"                         # sql-only, always, never
//!
//! [report]
//! output_dir = "/tmp/reports"
//! suffix = "-output.txt"
//! parallel = false
//!
//! [logging]
//! level = "warn"
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_LOG_CHECKER_KEYWORDS` | Comma-separated statement keywords |
//! | `SQL_LOG_CHECKER_OUTPUT_DIR` | Folder the report is written to |
//! | `SQL_LOG_CHECKER_LOG` | Log level or filter directive |

use std::{
    env, fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::{
    error::{AppResult, config_error, file_read_error},
    format::WhereSplit,
    report::DEFAULT_SUFFIX,
    sql::{DEFAULT_KEYWORDS, SqlClassifier}
};

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = ".sql-log-checker.toml";

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sql:     SqlConfig,
    #[serde(default)]
    pub report:  ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig
}

/// Statement recognition settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SqlConfig {
    /// Statement keywords, highest priority first
    pub keywords:    Vec<String>,
    pub where_split: WhereSplit
}

impl Default for SqlConfig {
    fn default() -> Self {
        Self {
            keywords:    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            where_split: WhereSplit::default()
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Folder for the report; current directory when unset
    pub output_dir: Option<PathBuf>,
    pub suffix:     String,
    /// Scan files on the rayon pool
    pub parallel:   bool
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            suffix:     String::from(DEFAULT_SUFFIX),
            parallel:   false
        }
    }
}

/// Diagnostic logging settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: Option<String>
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-log-checker.toml)
    /// 3. Config file in home directory (~/.config/sql-log-checker/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let home_config = env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".config")
                .join("sql-log-checker")
                .join("config.toml")
        });
        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        let mut config = Self::load_files(home_config.iter().chain([&local_config]))?;
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Load the last existing file of `paths`, or defaults if none exists.
    pub fn load_files<'a, I>(paths: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = &'a PathBuf>
    {
        let mut config = Self::default();
        for path in paths {
            if path.exists() {
                config = Self::from_file(path)?;
            }
        }
        Ok(config)
    }

    /// Read one config file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| file_read_error(&path.display().to_string(), e))?;
        Self::parse(&content)
    }

    /// Parse TOML config text
    pub fn parse(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }

    /// Override values from environment variables looked up with `lookup`
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>
    {
        if let Some(keywords) = lookup("SQL_LOG_CHECKER_KEYWORDS") {
            self.sql.keywords = keywords.split(',').map(|k| k.trim().to_string()).collect();
        }

        if let Some(dir) = lookup("SQL_LOG_CHECKER_OUTPUT_DIR") {
            self.report.output_dir = Some(PathBuf::from(dir));
        }

        if let Some(level) = lookup("SQL_LOG_CHECKER_LOG") {
            self.logging.level = Some(level);
        }
    }

    /// Build the statement classifier from the configured keywords
    ///
    /// # Errors
    ///
    /// Returns a config error when no non-blank keyword is left.
    pub fn classifier(&self) -> AppResult<SqlClassifier> {
        let classifier = SqlClassifier::with_keywords(&self.sql.keywords);
        if classifier.keywords().next().is_none() {
            return Err(config_error(
                "sql.keywords must name at least one statement keyword"
            ));
        }
        Ok(classifier)
    }
}
