//! Recognition and reconstruction of logged SQL statements.
//!
//! A line is treated as a logged statement when it contains one of the
//! configured statement keywords and the literal `params` marker. Keywords
//! are checked in priority order: the first keyword present wins, wherever it
//! sits in the line.
//!
//! # Example
//!
//! ```
//! use sql_log_checker::sql::{SqlClassifier, reconstruct};
//!
//! let line = "[10:00] UPDATE t SET a=? WHERE id=? [params=1, 2]";
//! let classification = SqlClassifier::new().classify(line);
//! let keyword = classification.keyword().unwrap();
//! let query = reconstruct(line, keyword).unwrap();
//!
//! assert_eq!(query.prefix, "[10:00]");
//! assert_eq!(query.query, "UPDATE t SET a=1 WHERE id=2");
//! ```

pub mod markers;
mod reconstruct;
mod types;

use compact_str::CompactString;
pub use reconstruct::{
    PARAM_SEPARATOR, PLACEHOLDER, parse_sql_line, reconstruct, split_parameters, substitute
};
use smallvec::SmallVec;
pub use types::{
    MalformedSqlLine, ParamMismatch, ParamVec, ParsedSqlLine, ReconstructedQuery,
    SqlClassification, Substitution
};

/// Statement keywords recognised by default, highest priority first
pub const DEFAULT_KEYWORDS: [&str; 3] = ["UPDATE", "SELECT", "DELETE FROM"];

/// Marker that must co-occur with a keyword
pub const PARAMS_MARKER: &str = "params";

/// Decides whether a line is a logged statement with parameters.
///
/// The keyword list is fixed at construction; order is priority.
#[derive(Debug, Clone)]
pub struct SqlClassifier {
    keywords: SmallVec<[CompactString; 4]>
}

impl Default for SqlClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlClassifier {
    /// Create a classifier with [`DEFAULT_KEYWORDS`]
    pub fn new() -> Self {
        Self::with_keywords(DEFAULT_KEYWORDS)
    }

    /// Create a classifier with a custom ordered keyword list
    ///
    /// # Notes
    ///
    /// - Keywords are trimmed; blank entries are ignored
    /// - An empty list never classifies anything as SQL
    pub fn with_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_string())
            .filter(|k| !k.is_empty())
            .map(CompactString::from)
            .collect();
        Self {
            keywords
        }
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(CompactString::as_str)
    }

    /// Classify a line
    pub fn classify(&self, line: &str) -> SqlClassification {
        let Some(params_offset) = line.find(PARAMS_MARKER) else {
            return SqlClassification::NotSql;
        };
        self.keywords
            .iter()
            .find_map(|keyword| {
                line.find(keyword.as_str())
                    .map(|keyword_offset| SqlClassification::Sql {
                        keyword: keyword.clone(),
                        keyword_offset,
                        params_offset
                    })
            })
            .unwrap_or(SqlClassification::NotSql)
    }
}

/// Classify a line with the default keyword set
pub fn classify(line: &str) -> SqlClassification {
    SqlClassifier::new().classify(line)
}
