//! Rendering of matching lines into report blocks.
//!
//! Every block starts with a `line: <n>` marker. Lines classified as logged
//! SQL are rendered as the prefix followed by the reconstructed statement on
//! its own line; everything else is copied verbatim. Depending on
//! [`WhereSplit`], a line break is then forced before the first `WHERE`.
//!
//! ```text
//!
//! line: 12
//! [2024-01-01 10:00:00]
//! SELECT * FROM t
//! WHERE id=42 AND name=Bob
//! ```

use std::borrow::Cow;

use serde::Deserialize;

use crate::sql::{
    MalformedSqlLine, ParamMismatch, SqlClassification, SqlClassifier, markers::where_offset,
    reconstruct
};

/// Line separator used inside the report
pub const LINE_BREAK: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Label in front of the line number of every block
pub const LINE_MARKER: &str = "line: ";

/// Which blocks get a line break before `WHERE`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WhereSplit {
    /// Only blocks holding a reconstructed statement
    #[default]
    SqlOnly,
    /// Every block, SQL or not
    Always,
    /// Never split
    Never
}

/// How the body of a block was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Raw line, not SQL
    Raw,
    /// Reconstructed statement
    Sql { mismatch: Option<ParamMismatch> },
    /// Classified as SQL but could not be taken apart; raw line kept
    Malformed(MalformedSqlLine)
}

/// Rendered text for one matching line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportBlock {
    pub line_number: usize,
    pub text:        String,
    pub kind:        BlockKind
}

impl ReportBlock {
    pub fn is_sql(&self) -> bool {
        matches!(self.kind, BlockKind::Sql { .. })
    }

    pub fn mismatch(&self) -> Option<&ParamMismatch> {
        match &self.kind {
            BlockKind::Sql {
                mismatch
            } => mismatch.as_ref(),
            _ => None
        }
    }

    pub fn malformed(&self) -> Option<MalformedSqlLine> {
        match self.kind {
            BlockKind::Malformed(reason) => Some(reason),
            _ => None
        }
    }
}

/// Turns a matching line into a [`ReportBlock`].
///
/// Holds no per-line state; the same formatter can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct LineFormatter {
    classifier:  SqlClassifier,
    where_split: WhereSplit
}

impl LineFormatter {
    pub fn new(classifier: SqlClassifier, where_split: WhereSplit) -> Self {
        Self {
            classifier,
            where_split
        }
    }

    pub fn classifier(&self) -> &SqlClassifier {
        &self.classifier
    }

    pub fn where_split(&self) -> WhereSplit {
        self.where_split
    }

    /// Render one matching line.
    ///
    /// A line that classifies as SQL but is missing one of the markers the
    /// reconstruction needs falls back to the raw text and is tagged
    /// [`BlockKind::Malformed`].
    pub fn format(&self, line_number: usize, raw: &str) -> ReportBlock {
        let (body, kind) = match self.classifier.classify(raw) {
            SqlClassification::NotSql => (Cow::Borrowed(raw), BlockKind::Raw),
            SqlClassification::Sql {
                keyword, ..
            } => match reconstruct(raw, &keyword) {
                Ok(query) => (
                    Cow::Owned(format!("{}{}{}", query.prefix, LINE_BREAK, query.query)),
                    BlockKind::Sql {
                        mismatch: query.mismatch
                    }
                ),
                Err(reason) => (Cow::Borrowed(raw), BlockKind::Malformed(reason))
            }
        };
        let text = format!("{}{}", line_header(line_number), body);
        let split = match self.where_split {
            WhereSplit::Always => true,
            WhereSplit::SqlOnly => matches!(kind, BlockKind::Sql { .. }),
            WhereSplit::Never => false
        };
        let text = if split {
            split_before_where(&text).into_owned()
        } else {
            text
        };
        ReportBlock {
            line_number,
            text,
            kind
        }
    }
}

/// Marker opening a block: line break, `line: <n>`, line break.
pub fn line_header(line_number: usize) -> String {
    format!("{LINE_BREAK}{LINE_MARKER}{line_number}{LINE_BREAK}")
}

/// Insert a line break before the first `WHERE`.
///
/// No-op when `WHERE` is absent or already starts a line, so applying it
/// twice gives the same text as applying it once.
pub fn split_before_where(text: &str) -> Cow<'_, str> {
    match where_offset(text) {
        Some(pos) if !text[..pos].ends_with('\n') => {
            let mut split = String::with_capacity(text.len() + LINE_BREAK.len());
            split.push_str(&text[..pos]);
            split.push_str(LINE_BREAK);
            split.push_str(&text[pos..]);
            Cow::Owned(split)
        }
        _ => Cow::Borrowed(text)
    }
}
