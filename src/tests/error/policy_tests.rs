//! Tests for ErrorPolicy behavior.

use crate::error::{AggregateError, ErrorPolicy, SourceError};

fn io_error(target: &str) -> SourceError {
    SourceError::Io {
        path: target.into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    }
}

#[test]
fn error_policy_default_is_accumulate() {
    let policy = ErrorPolicy::default();
    assert_eq!(policy, ErrorPolicy::Accumulate);
}

#[test]
fn error_policy_parses_names() {
    assert_eq!(ErrorPolicy::from_str("fast_fail"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::from_str("Fast-Fail"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::from_str("fastfail"), Some(ErrorPolicy::FastFail));
    assert_eq!(ErrorPolicy::from_str("accumulate"), Some(ErrorPolicy::Accumulate));
    assert_eq!(ErrorPolicy::from_str("sometimes"), None);
}

#[test]
fn aggregate_error_single_and_len() {
    let agg = AggregateError::single(io_error("test"));
    assert_eq!(agg.len(), 1);
    assert!(!agg.is_empty());
}

#[test]
fn aggregate_error_from_single() {
    let agg: AggregateError = io_error("input").into();
    assert_eq!(agg.len(), 1);
}
