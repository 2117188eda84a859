// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_log_checker::{
    format::{BlockKind, LINE_BREAK, LineFormatter, WhereSplit, line_header, split_before_where},
    sql::{MalformedSqlLine, SqlClassifier}
};

const SAMPLE: &str =
    "[2024-01-01 10:00:00] SELECT * FROM t WHERE id=? AND name=? [params=42, Bob]";

fn formatter(where_split: WhereSplit) -> LineFormatter {
    LineFormatter::new(SqlClassifier::new(), where_split)
}

#[test]
fn test_sql_block_layout() {
    let block = LineFormatter::default().format(12, SAMPLE);
    let expected = format!(
        "{nl}line: 12{nl}[2024-01-01 10:00:00]{nl}SELECT * FROM t {nl}WHERE id=42 AND name=Bob",
        nl = LINE_BREAK
    );
    assert_eq!(block.text, expected);
    assert_eq!(block.line_number, 12);
    assert!(block.is_sql());
    assert!(block.mismatch().is_none());
}

#[test]
fn test_line_break_immediately_before_where() {
    let block = LineFormatter::default().format(1, SAMPLE);
    let pos = block.text.find("WHERE").unwrap();
    assert!(block.text[..pos].ends_with(LINE_BREAK));
    assert_eq!(block.text.matches(&format!("{LINE_BREAK}WHERE")).count(), 1);
}

#[test]
fn test_split_is_idempotent() {
    let block = LineFormatter::default().format(1, SAMPLE);
    let again = split_before_where(&block.text);
    assert_eq!(again, block.text);
}

#[test]
fn test_only_first_where_is_split() {
    let line = "[t] SELECT a FROM t WHERE id IN (SELECT b FROM u WHERE c=?) [params=1]";
    let block = LineFormatter::default().format(2, line);
    assert_eq!(block.text.matches(LINE_BREAK).count(), 4);
    assert!(block.text.ends_with("u WHERE c=1)"));
}

#[test]
fn test_non_sql_line_is_raw() {
    let block = LineFormatter::default().format(4, "2024 ERROR: connection Timeout");
    assert_eq!(block.kind, BlockKind::Raw);
    assert_eq!(
        block.text,
        format!("{}2024 ERROR: connection Timeout", line_header(4))
    );
}

#[test]
fn test_where_split_always_applies_to_raw_lines() {
    let block = formatter(WhereSplit::Always).format(4, "filter WHERE clause missing");
    assert_eq!(
        block.text,
        format!("{}filter {LINE_BREAK}WHERE clause missing", line_header(4))
    );
}

#[test]
fn test_where_split_never() {
    let block = formatter(WhereSplit::Never).format(1, SAMPLE);
    assert!(block.text.contains("t WHERE id=42"));
}

#[test]
fn test_no_where_is_noop() {
    let line = "[t] UPDATE t SET a=? [params=5]";
    let block = formatter(WhereSplit::Always).format(9, line);
    assert_eq!(
        block.text,
        format!("{}[t]{LINE_BREAK}UPDATE t SET a=5", line_header(9))
    );
}

#[test]
fn test_malformed_line_falls_back_to_raw() {
    let line = "SELECT a FROM t WHERE id=? params=1";
    let block = LineFormatter::default().format(3, line);
    assert_eq!(
        block.kind,
        BlockKind::Malformed(MalformedSqlLine::MissingPrefixBracket)
    );
    assert_eq!(block.text, format!("{}{}", line_header(3), line));
}

#[test]
fn test_mismatch_is_recorded_on_block() {
    let block = LineFormatter::default().format(1, "[t] UPDATE t SET a=?, b=? [params=1]");
    let mismatch = block.mismatch().unwrap();
    assert_eq!(mismatch.unsubstituted, 1);
    assert!(block.text.ends_with("UPDATE t SET a=1, b=?"));
}
