//! Tests for parse statistics and diagnostics.

use crate::parser::stats::{Diagnostic, ParseStats};

#[test]
fn test_parse_stats_calculation() {
    let stats = ParseStats {
        total_rows: 100,
        rows_decoded: 95,
        rows_rejected: 5,
        diagnostics: vec![Diagnostic::RowCountMismatch {
            declared: 100,
            counted: 95,
        }],
    };

    assert_eq!(stats.success_rate(), 95.0);
    assert!(!stats.is_clean());
}

#[test]
fn test_parse_stats_empty() {
    let empty_stats = ParseStats::new();

    assert_eq!(empty_stats.total_rows, 0);
    assert_eq!(empty_stats.rows_decoded, 0);
    assert_eq!(empty_stats.rows_rejected, 0);
    assert!(empty_stats.diagnostics.is_empty());
    assert_eq!(empty_stats.success_rate(), 0.0);
    assert!(empty_stats.is_clean());
}

#[test]
fn test_parse_stats_perfect() {
    let perfect_stats = ParseStats {
        total_rows: 50,
        rows_decoded: 50,
        rows_rejected: 0,
        diagnostics: vec![],
    };

    assert_eq!(perfect_stats.success_rate(), 100.0);
    assert!(perfect_stats.is_clean());
}

#[test]
fn test_diagnostic_display_names_offender() {
    let rejected = Diagnostic::ChecksumRejected {
        line: 17,
        identifier: "BBG000B9XRY5".to_string(),
    };
    let text = rejected.to_string();
    assert!(text.contains("line 17"));
    assert!(text.contains("BBG000B9XRY5"));

    let mismatch = Diagnostic::RowCountMismatch {
        declared: 10,
        counted: 9,
    };
    let text = mismatch.to_string();
    assert!(text.contains("10"));
    assert!(text.contains('9'));
}

#[test]
fn test_stats_serialize_round_trip() {
    let stats = ParseStats {
        total_rows: 3,
        rows_decoded: 2,
        rows_rejected: 1,
        diagnostics: vec![Diagnostic::ChecksumRejected {
            line: 8,
            identifier: "BBG000B9XRY5".to_string(),
        }],
    };

    let json = serde_json::to_string(&stats).unwrap();
    let back: ParseStats = serde_json::from_str(&json).unwrap();
    assert_eq!(back.rows_decoded, 2);
    assert_eq!(back.diagnostics, stats.diagnostics);
}
