//! Marker searches used to take a logged statement apart.
//!
//! Each search reports found/not-found as an `Option` of a byte offset into
//! the searched string; none of them can index out of bounds.

/// Closes the leading timestamp/context token
pub const PREFIX_END: char = ']';
/// Opens the parameter block after the query
pub const PARAM_BLOCK_START: char = '[';
/// Closes the parameter block
pub const PARAM_BLOCK_END: char = ']';
/// Introduces the parameter values inside the block
pub const PARAMS_ASSIGN: &str = "params=";
/// Clause keyword that gets its own line in the report
pub const WHERE_KEYWORD: &str = "WHERE";

/// Find `needle` at or after byte offset `from`.
pub fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack
        .get(from..)
        .and_then(|tail| tail.find(needle))
        .map(|pos| from + pos)
}

/// Offset of the `]` ending the line prefix (first `]` of the line).
pub fn prefix_end(line: &str) -> Option<usize> {
    line.find(PREFIX_END)
}

/// Offset of the `[` opening the parameter block, searched from the keyword.
pub fn param_block_start(line: &str, keyword_offset: usize) -> Option<usize> {
    line.get(keyword_offset..)
        .and_then(|tail| tail.find(PARAM_BLOCK_START))
        .map(|pos| keyword_offset + pos)
}

/// Offset just past `params=`, searched from `from`.
pub fn params_value_start(line: &str, from: usize) -> Option<usize> {
    find_from(line, PARAMS_ASSIGN, from).map(|pos| pos + PARAMS_ASSIGN.len())
}

/// Offset of the `]` closing the `[` at `block_start`.
///
/// Brackets nested inside the block are balanced, so a bracketed value stays
/// inside and a bracketed token after the block stays outside.
pub fn param_block_end(line: &str, block_start: usize) -> Option<usize> {
    let tail = line.get(block_start..)?;
    let mut depth = 0usize;
    for (pos, ch) in tail.char_indices() {
        match ch {
            PARAM_BLOCK_START => depth += 1,
            PARAM_BLOCK_END => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(block_start + pos);
                }
            }
            _ => {}
        }
    }
    None
}

/// Offset of the first `WHERE` in a rendered block.
pub fn where_offset(text: &str) -> Option<usize> {
    text.find(WHERE_KEYWORD)
}
