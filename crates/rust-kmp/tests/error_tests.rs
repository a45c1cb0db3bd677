//! Error handling tests.
//!
//! Error variants, construction helpers and introspection.

use std::error::Error as _;
use std::io;

use rust_kmp::error::KmpError;
use rust_kmp::{Matcher, search, try_search};

// =============================================================================
// Only absent input is an error
// =============================================================================

#[test]
fn valid_inputs_never_error() {
    let cases: [(&[u8], &[u8]); 5] = [
        (b"", b""),
        (b"", b"abc"),
        (b"abc", b""),
        (b"ab", b"abc"),
        (b"aaaa", b"aa"),
    ];
    for (text, pattern) in cases {
        assert_eq!(try_search(Some(text), Some(pattern)).unwrap(), search(text, pattern));
    }
}

#[test]
fn absent_text_is_invalid_input() {
    let err = try_search::<u8>(None, Some(&b"abc"[..])).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(!err.is_config());
    assert_eq!(err.to_string(), "invalid text: text cannot be absent");
}

#[test]
fn empty_matcher_pattern_is_invalid_input() {
    let err = Matcher::<u8>::new(b"").unwrap_err();
    if let KmpError::InvalidInput { argument, reason } = err {
        assert_eq!(argument, "pattern");
        assert_eq!(reason, "pattern cannot be empty");
    } else {
        panic!("Expected InvalidInput variant");
    }
}

// =============================================================================
// Construction helpers
// =============================================================================

#[test]
fn invalid_input_creation() {
    let err = KmpError::invalid_input("text", "too short");
    assert_eq!(err.argument(), Some("text"));
    assert_eq!(err.to_string(), "invalid text: too short");
}

#[test]
fn config_error_creation() {
    let err = KmpError::config("bad value");
    assert!(err.is_config());
    assert_eq!(err.argument(), None);
    assert_eq!(err.to_string(), "configuration error: bad value");
}

#[test]
fn io_errors_convert() {
    let err: KmpError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
    assert!(matches!(err, KmpError::Io(_)));
    assert!(err.source().is_some());
}

#[test]
fn io_context_keeps_source() {
    let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
    let err = KmpError::with_io_context(result, "reading kmp.toml").unwrap_err();
    assert_eq!(err.to_string(), "reading kmp.toml: gone");
    assert_eq!(err.source().map(ToString::to_string), Some("gone".to_string()));
}

#[test]
fn errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<KmpError>();
}
