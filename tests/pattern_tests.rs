// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use sql_log_checker::pattern::{PatternSet, matches};

#[test]
fn test_all_patterns_present_matches() {
    let patterns = PatternSet::from_patterns(["error", "timeout"]);
    assert!(matches("2024 ERROR: connection Timeout", &patterns));
}

#[test]
fn test_one_pattern_missing_does_not_match() {
    let patterns = PatternSet::from_patterns(["error", "timeout"]);
    assert!(!matches("2024 ERROR only", &patterns));
}

#[test]
fn test_empty_set_matches_everything() {
    let patterns = PatternSet::default();
    assert!(matches("", &patterns));
    assert!(matches("any line at all", &patterns));
    assert!(matches("\u{0}\u{ff} binary junk", &patterns));
}

#[test]
fn test_empty_input_gives_empty_set() {
    assert!(PatternSet::parse("").is_empty());
    assert!(PatternSet::parse(" , ,, ").is_empty());
}

#[test]
fn test_order_does_not_change_result() {
    let forward = PatternSet::parse("alpha,beta");
    let backward = PatternSet::parse("beta,alpha");
    for line in ["alpha beta", "BETA ALPHA", "alpha", "beta", "gamma"] {
        assert_eq!(forward.matches(line), backward.matches(line), "line: {line}");
    }
}

#[test]
fn test_order_is_preserved() {
    let patterns = PatternSet::parse("zeta, alpha, mid");
    assert_eq!(patterns.iter().collect::<Vec<_>>(), vec!["ZETA", "ALPHA", "MID"]);
}

#[test]
fn test_pattern_with_inner_space() {
    let patterns = PatternSet::parse(" connection reset ");
    assert!(patterns.matches("WARN Connection Reset by peer"));
    assert!(!patterns.matches("WARN connection was reset"));
}

#[test]
fn test_substring_inside_word() {
    let patterns = PatternSet::parse("time");
    assert!(patterns.matches("Timeout after 30s"));
}
