//! Case-insensitive, all-must-match line filtering.
//!
//! A [`PatternSet`] is the conjunction of plain substrings a line has to
//! contain to be reported. There is no pattern language: every entry is
//! compared as a literal substring after upper-casing both sides.
//!
//! # Example
//!
//! ```
//! use sql_log_checker::pattern::PatternSet;
//!
//! let patterns = PatternSet::parse("error, timeout");
//!
//! assert!(patterns.matches("2024 ERROR: connection Timeout"));
//! assert!(!patterns.matches("2024 ERROR only"));
//! assert!(PatternSet::default().matches("anything at all"));
//! ```

use compact_str::CompactString;
use indexmap::IndexSet;

/// Separator between entries of a pattern list typed by the user
pub const PATTERN_SEPARATOR: char = ',';

/// Ordered set of case-folded substrings, all of which must be present.
///
/// Entries are trimmed, empty entries are dropped and duplicates collapse
/// onto their first occurrence. The set is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: IndexSet<CompactString>
}

impl PatternSet {
    /// Build a set from a comma-separated pattern list.
    ///
    /// An empty or whitespace-only input yields an empty set, which matches
    /// every line.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::from_patterns(input.split(PATTERN_SEPARATOR))
    }

    /// Build a set from individual patterns.
    #[must_use]
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_uppercase())
            .filter(|p| !p.is_empty())
            .map(CompactString::from)
            .collect();
        Self {
            patterns
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Case-folded patterns in the order they were first given.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(CompactString::as_str)
    }

    /// Check whether `line` contains every pattern, ignoring case.
    pub fn matches(&self, line: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        let folded = line.to_uppercase();
        self.patterns.iter().all(|p| folded.contains(p.as_str()))
    }
}

/// Check a line against a pattern set.
///
/// Free-function form of [`PatternSet::matches`].
pub fn matches(line: &str, patterns: &PatternSet) -> bool {
    patterns.matches(line)
}
