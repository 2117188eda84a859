//! Rebuilds a readable statement from a logged template and its parameters.
//!
//! A logged statement looks like
//!
//! ```text
//! [2024-01-01 10:00:00] SELECT * FROM t WHERE id=? AND name=? [params=42, Bob]
//! └──────── prefix ───┘ └────────────── template ─────────────┘ └─ block ──┘
//! ```
//!
//! The Nth `?` of the template receives the Nth parameter of the block.

use compact_str::CompactString;

use super::{
    markers::{param_block_end, param_block_start, params_value_start, prefix_end},
    types::{
        MalformedSqlLine, ParamMismatch, ParamVec, ParsedSqlLine, ReconstructedQuery,
        Substitution
    }
};

/// Bind parameter position in a template
pub const PLACEHOLDER: char = '?';
/// Separator between values inside the parameter block
pub const PARAM_SEPARATOR: &str = ", ";

/// Split a logged statement into prefix, template and parameters.
///
/// # Errors
///
/// Returns the first structural marker found missing, in this order: the
/// prefix `]`, the keyword, the `[` after the keyword, `params=`, and the
/// closing `]`.
pub fn parse_sql_line(line: &str, keyword: &str) -> Result<ParsedSqlLine, MalformedSqlLine> {
    let prefix_end = prefix_end(line).ok_or(MalformedSqlLine::MissingPrefixBracket)?;
    let keyword_offset = line
        .find(keyword)
        .ok_or(MalformedSqlLine::MissingKeyword)?;
    let block_start =
        param_block_start(line, keyword_offset).ok_or(MalformedSqlLine::MissingParamBlock)?;
    let values_start =
        params_value_start(line, block_start).ok_or(MalformedSqlLine::MissingParamsMarker)?;
    let values_end =
        param_block_end(line, block_start).ok_or(MalformedSqlLine::UnterminatedParamBlock)?;
    if values_start > values_end {
        return Err(MalformedSqlLine::MissingParamsMarker);
    }
    Ok(ParsedSqlLine {
        prefix:     line[..=prefix_end].to_string(),
        template:   line[keyword_offset..block_start].trim_end().to_string(),
        parameters: split_parameters(&line[values_start..values_end])
    })
}

/// Split the inside of a parameter block on `", "`.
///
/// An empty block gives an empty list.
pub fn split_parameters(block: &str) -> ParamVec {
    if block.is_empty() {
        return ParamVec::new();
    }
    block.split(PARAM_SEPARATOR).map(CompactString::from).collect()
}

/// Replace placeholders left to right with parameters in order.
///
/// Placeholders without a parameter stay as `?`; parameters without a
/// placeholder are reported in the mismatch.
pub fn substitute(template: &str, parameters: &[CompactString]) -> Substitution {
    let capacity = template.len() + parameters.iter().map(|p| p.len()).sum::<usize>();
    let mut query = String::with_capacity(capacity);
    let mut remaining = parameters.iter();
    let mut placeholders = 0;
    let mut unsubstituted = 0;
    for ch in template.chars() {
        if ch != PLACEHOLDER {
            query.push(ch);
            continue;
        }
        placeholders += 1;
        match remaining.next() {
            Some(value) => query.push_str(value),
            None => {
                unsubstituted += 1;
                query.push(ch);
            }
        }
    }
    let unused: ParamVec = remaining.cloned().collect();
    let mismatch = (unsubstituted > 0 || !unused.is_empty()).then(|| ParamMismatch {
        placeholders,
        parameters: parameters.len(),
        unsubstituted,
        unused
    });
    Substitution {
        query,
        placeholders,
        mismatch
    }
}

/// Parse a logged statement and substitute its parameters.
///
/// # Errors
///
/// Propagates [`MalformedSqlLine`] from [`parse_sql_line`].
pub fn reconstruct(line: &str, keyword: &str) -> Result<ReconstructedQuery, MalformedSqlLine> {
    let parsed = parse_sql_line(line, keyword)?;
    let substitution = substitute(&parsed.template, &parsed.parameters);
    Ok(ReconstructedQuery {
        prefix:   parsed.prefix,
        query:    substitution.query,
        mismatch: substitution.mismatch
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(values: &[&str]) -> ParamVec {
        values.iter().map(|v| CompactString::from(*v)).collect()
    }

    #[test]
    fn test_parse_sql_line_parts() {
        let line = "[2024-01-01 10:00:00] SELECT * FROM t WHERE id=? AND name=? [params=42, Bob]";
        let parsed = parse_sql_line(line, "SELECT").unwrap();
        assert_eq!(parsed.prefix, "[2024-01-01 10:00:00]");
        assert_eq!(parsed.template, "SELECT * FROM t WHERE id=? AND name=?");
        assert_eq!(parsed.parameters, params(&["42", "Bob"]));
    }

    #[test]
    fn test_split_parameters_empty() {
        assert!(split_parameters("").is_empty());
    }

    #[test]
    fn test_split_parameters_keeps_inner_commas() {
        assert_eq!(split_parameters("a,b, c"), params(&["a,b", "c"]));
    }

    #[test]
    fn test_substitute_exact() {
        let result = substitute("a=? AND b=?", &params(&["1", "2"]));
        assert_eq!(result.query, "a=1 AND b=2");
        assert_eq!(result.placeholders, 2);
        assert!(result.mismatch.is_none());
    }

    #[test]
    fn test_substitute_does_not_rescan_values() {
        let result = substitute("a=? AND b=?", &params(&["?", "2"]));
        assert_eq!(result.query, "a=? AND b=2");
        assert!(result.mismatch.is_none());
    }

    #[test]
    fn test_substitute_without_placeholders() {
        let result = substitute("SELECT 1", &ParamVec::new());
        assert_eq!(result.query, "SELECT 1");
        assert_eq!(result.placeholders, 0);
        assert!(result.mismatch.is_none());
    }

    #[test]
    fn test_prefix_is_first_bracket_of_line() {
        let parsed = parse_sql_line("SELECT a FROM t [params=1]", "SELECT").unwrap();
        assert_eq!(parsed.prefix, "SELECT a FROM t [params=1]");
        assert_eq!(parsed.template, "SELECT a FROM t");
    }

    #[test]
    fn test_params_marker_after_block_is_missing() {
        let err = parse_sql_line("[t] SELECT a [x] params=1", "SELECT").unwrap_err();
        assert_eq!(err, MalformedSqlLine::MissingParamsMarker);
    }

    #[test]
    fn test_parse_missing_prefix() {
        let err = parse_sql_line("SELECT a FROM t params=1", "SELECT").unwrap_err();
        assert_eq!(err, MalformedSqlLine::MissingPrefixBracket);
    }
}
