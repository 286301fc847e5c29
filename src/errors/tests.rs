//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Span;
use std::rc::Rc;

fn unclassifiable(token: &str, span: Span) -> Error {
    Error::new(
        ErrorImpl::UnclassifiableToken {
            token: token.to_string(),
        },
        span,
        Rc::new("test.su".to_string()),
    )
}

#[test]
fn test_error_creation() {
    let error = unclassifiable("@", Span::new(10, 10));

    assert_eq!(error.get_error_name(), "UnclassifiableToken");
    assert_eq!(error.get_token(), "@");
    assert_eq!(error.get_file(), "test.su");
}

#[test]
fn test_error_span() {
    let error = unclassifiable("'abc", Span::new(42, 45));

    assert_eq!(error.get_span(), Span::new(42, 45));
    assert_eq!(error.get_span().len(), 4);
}

#[test]
fn test_error_display_matches_fatal_text() {
    let error = unclassifiable("@", Span::new(0, 0));

    assert_eq!(error.to_string(), "undefined token: '@'");
}

#[test]
fn test_error_impl_display() {
    let error = ErrorImpl::UnclassifiableToken {
        token: "x := @".to_string(),
    };

    assert_eq!(error.to_string(), "undefined token: 'x := @'");
}

#[test]
fn test_error_tip_none_for_single_character() {
    let error = unclassifiable("@", Span::new(0, 0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion_for_longer_candidate() {
    let error = unclassifiable("'unterminated\n", Span::new(0, 13));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("unterminated\\n")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}

    let error = unclassifiable("@", Span::new(0, 0));
    assert_error(&error);
}
