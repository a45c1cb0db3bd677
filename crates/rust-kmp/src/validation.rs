//! Pattern and text validation.
//!
//! Rust slices cannot be null, so "absent" input only exists at boundaries
//! where callers hold an `Option` (deserialised requests, foreign callers,
//! optional fields). These helpers turn such inputs into borrowed slices or a
//! [`KmpError::InvalidInput`] naming the offending argument.

use crate::error::{KmpError, Result};

/// Validation options for search arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Whether to reject present but empty sequences.
    pub reject_empty: bool,
}

impl ValidationOptions {
    /// Reject absent and empty sequences (what a [`Matcher`](crate::Matcher) pattern needs).
    #[must_use]
    pub const fn strict() -> Self {
        Self { reject_empty: true }
    }

    /// Reject only absent sequences.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            reject_empty: false,
        }
    }
}

/// Validate one named sequence argument.
pub fn validate_sequence<'a, T>(
    argument: &'static str,
    value: Option<&'a [T]>,
    options: &ValidationOptions,
) -> Result<&'a [T]> {
    let value = value.ok_or_else(|| KmpError::absent(argument))?;

    if options.reject_empty && value.is_empty() {
        return Err(KmpError::invalid_input(
            argument,
            format!("{argument} cannot be empty"),
        ));
    }

    Ok(value)
}

/// Validate a pattern argument.
pub fn validate_pattern<'a, T>(
    pattern: Option<&'a [T]>,
    options: &ValidationOptions,
) -> Result<&'a [T]> {
    validate_sequence("pattern", pattern, options)
}

/// Validate a text argument. Texts are never rejected for being empty.
pub fn validate_text<T>(text: Option<&[T]>) -> Result<&[T]> {
    validate_sequence("text", text, &ValidationOptions::permissive())
}

/// Validate a text and pattern pair for a search.
///
/// The text is checked first, so an absent text is reported even when the
/// pattern is absent too.
pub fn validate_input<'t, 'p, T>(
    text: Option<&'t [T]>,
    pattern: Option<&'p [T]>,
    options: &ValidationOptions,
) -> Result<(&'t [T], &'p [T])> {
    let text = validate_text(text)?;
    let pattern = validate_pattern(pattern, options)?;
    Ok((text, pattern))
}
