use std::fmt;

use compact_str::CompactString;
use smallvec::SmallVec;

/// Type alias for bind parameter lists (typically < 8 elements)
pub type ParamVec = SmallVec<[CompactString; 8]>;

/// Result of classifying a single log line.
///
/// Offsets are byte offsets into the classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlClassification {
    /// Line carries no recognised statement keyword together with a
    /// parameter marker
    NotSql,
    /// Line looks like a logged statement with bind parameters
    Sql {
        /// Keyword that won by priority
        keyword:        CompactString,
        /// Offset of the keyword's first occurrence
        keyword_offset: usize,
        /// Offset of the first parameter marker
        params_offset:  usize
    }
}

impl SqlClassification {
    pub fn is_sql(&self) -> bool {
        matches!(self, Self::Sql { .. })
    }

    /// Winning keyword, if the line classified as SQL.
    pub fn keyword(&self) -> Option<&str> {
        match self {
            Self::NotSql => None,
            Self::Sql {
                keyword, ..
            } => Some(keyword.as_str())
        }
    }
}

/// Logged statement split into its parts, before substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSqlLine {
    /// Text up to and including the first `]` of the line
    pub prefix:     String,
    /// Query text from the keyword up to the parameter block, right-trimmed
    pub template:   String,
    /// Bind parameters in log order
    pub parameters: ParamVec
}

/// Fully rendered statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconstructedQuery {
    pub prefix:   String,
    pub query:    String,
    /// Present when placeholder and parameter counts differ
    pub mismatch: Option<ParamMismatch>
}

/// Outcome of positional substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub query:        String,
    pub placeholders: usize,
    pub mismatch:     Option<ParamMismatch>
}

/// Placeholder and parameter counts that did not line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamMismatch {
    /// Number of `?` in the template
    pub placeholders:  usize,
    /// Number of parameters in the block
    pub parameters:    usize,
    /// Placeholders left as `?` for lack of a parameter
    pub unsubstituted: usize,
    /// Trailing parameters with no placeholder left to fill
    pub unused:        ParamVec
}

impl fmt::Display for ParamMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unsubstituted > 0 {
            write!(
                f,
                "{} placeholder(s) but only {} parameter(s), {} left unsubstituted",
                self.placeholders, self.parameters, self.unsubstituted
            )
        } else {
            let unused: Vec<&str> = self.unused.iter().map(|p| p.as_str()).collect();
            write!(
                f,
                "{} placeholder(s) but {} parameter(s), unused: {}",
                self.placeholders,
                self.parameters,
                unused.join(", ")
            )
        }
    }
}

/// Structural marker missing from a line classified as SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedSqlLine {
    /// No `]` closing the leading timestamp/context token
    MissingPrefixBracket,
    /// Keyword not present in the line
    MissingKeyword,
    /// No `[` opening the parameter block after the keyword
    MissingParamBlock,
    /// Parameter block has no `params=` marker
    MissingParamsMarker,
    /// No `]` closing the parameter block
    UnterminatedParamBlock
}

impl fmt::Display for MalformedSqlLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefixBracket => write!(f, "no ']' closing the line prefix"),
            Self::MissingKeyword => write!(f, "statement keyword not found"),
            Self::MissingParamBlock => write!(f, "no '[' opening the parameter block"),
            Self::MissingParamsMarker => write!(f, "no 'params=' marker in the parameter block"),
            Self::UnterminatedParamBlock => write!(f, "no ']' closing the parameter block")
        }
    }
}

impl std::error::Error for MalformedSqlLine {}
