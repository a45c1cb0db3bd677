//! Knuth-Morris-Pratt match engine.
//!
//! The engine is a deterministic automaton whose state `j` is the number of
//! pattern symbols matched so far. Reading `text[i]` in state `j`:
//!
//! - `text[i] == pattern[j]`: move to `j + 1` and consume `i`. Reaching
//!   `j == m` reports a match at `i + 1 - m` and moves to `failure[m - 1]`
//!   (or `0` when overlaps are disabled).
//! - mismatch with `j > 0`: move to `failure[j - 1]`, keep `i`.
//! - mismatch with `j == 0`: stay in state `0`, consume `i`.
//!
//! `i` never moves backwards and every fallback strictly lowers `j`, which was
//! raised at most once per consumed symbol, so a full scan is `O(n + m)`.

use std::iter::FusedIterator;

use crate::config::{EmptyPatternPolicy, OverlapMode, SearchConfig};
use crate::error::{KmpError, Result};
use crate::failure::{FailureFunction, build_failure_function};
use crate::validation::{ValidationOptions, validate_input};

/// Scan position: text index `i` and automaton state `j`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct MatchState {
    i: usize,
    j: usize,
}

/// Lazy iterator over match start offsets, in strictly increasing order.
///
/// Created by [`Matcher::find_iter`](crate::Matcher::find_iter) or
/// [`Matches::new`]. All scan state lives in this value, so independent
/// iterators over the same pattern never interact.
#[derive(Debug, Clone)]
pub struct Matches<'p, 't, T> {
    pattern: &'p [T],
    failure: &'p FailureFunction,
    text: &'t [T],
    state: MatchState,
    overlap: OverlapMode,
    empty_pattern: EmptyPatternPolicy,
    remaining: Option<usize>,
    exhausted: bool,
}

impl<'p, 't, T: PartialEq> Matches<'p, 't, T> {
    /// Start a scan of `text` for `pattern` using its precomputed `failure` table.
    ///
    /// # Errors
    ///
    /// Returns [`KmpError::InvalidInput`] naming `failure` if the table was
    /// built from a pattern of a different length.
    pub fn new(
        pattern: &'p [T],
        failure: &'p FailureFunction,
        text: &'t [T],
        config: &SearchConfig,
    ) -> Result<Self> {
        if failure.len() != pattern.len() {
            return Err(KmpError::invalid_input(
                "failure",
                format!(
                    "table has {} entries but the pattern has {} symbols",
                    failure.len(),
                    pattern.len()
                ),
            ));
        }
        Ok(Self::with_table(pattern, failure, text, config))
    }

    /// Start a scan with a table the caller built from `pattern` itself.
    pub(crate) fn with_table(
        pattern: &'p [T],
        failure: &'p FailureFunction,
        text: &'t [T],
        config: &SearchConfig,
    ) -> Self {
        Self {
            pattern,
            failure,
            text,
            state: MatchState::default(),
            overlap: config.overlap,
            empty_pattern: config.empty_pattern,
            remaining: config.max_matches,
            exhausted: false,
        }
    }

    /// The text being scanned.
    #[must_use]
    pub const fn text(&self) -> &'t [T] {
        self.text
    }

    /// Index of the next text symbol the automaton will read.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.state.i
    }

    fn next_match(&mut self) -> Option<usize> {
        let m = self.pattern.len();
        let n = self.text.len();
        let MatchState { mut i, mut j } = self.state;

        // Invariant at the top of the loop: j < m.
        while n - i >= m - j {
            if self.text[i] == self.pattern[j] {
                i += 1;
                j += 1;
                if j == m {
                    j = match self.overlap {
                        OverlapMode::Overlapping => self.failure[m - 1],
                        OverlapMode::NonOverlapping => 0,
                    };
                    self.state = MatchState { i, j };
                    return Some(i - m);
                }
            } else if j > 0 {
                j = self.failure[j - 1];
            } else {
                i += 1;
            }
        }

        self.state = MatchState { i, j };
        None
    }

    fn next_empty(&mut self) -> Option<usize> {
        match self.empty_pattern {
            EmptyPatternPolicy::NoMatches => None,
            EmptyPatternPolicy::EveryPosition => {
                let at = self.state.i;
                if at > self.text.len() {
                    return None;
                }
                self.state.i += 1;
                Some(at)
            }
        }
    }
}

impl<T: PartialEq> Iterator for Matches<'_, '_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.remaining == Some(0) {
            return None;
        }

        let found = if self.pattern.is_empty() {
            self.next_empty()
        } else {
            self.next_match()
        };

        match found {
            Some(_) => {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
            }
            None => self.exhausted = true,
        }
        found
    }
}

impl<T: PartialEq> FusedIterator for Matches<'_, '_, T> {}

fn collect_offsets<T: PartialEq>(matches: Matches<'_, '_, T>) -> Vec<usize> {
    let text_len = matches.text.len();
    let pattern_len = matches.pattern.len();
    let offsets: Vec<usize> = matches.collect();
    tracing::trace!(
        text.len = text_len,
        pattern.len = pattern_len,
        matches = offsets.len(),
        "search complete"
    );
    offsets
}

/// Find every occurrence of `pattern` in `text` using a precomputed table.
///
/// # Errors
///
/// Returns [`KmpError::InvalidInput`] naming `failure` if the table was built
/// from a pattern of a different length.
pub fn search_with_failure<T: PartialEq>(
    failure: &FailureFunction,
    pattern: &[T],
    text: &[T],
    config: &SearchConfig,
) -> Result<Vec<usize>> {
    Matches::new(pattern, failure, text, config).map(collect_offsets)
}

/// Find every occurrence of `pattern` in `text` with custom options.
#[must_use]
pub fn search_with<T: PartialEq>(text: &[T], pattern: &[T], config: &SearchConfig) -> Vec<usize> {
    let failure = build_failure_function(pattern);
    collect_offsets(Matches::with_table(pattern, &failure, text, config))
}

/// Find every occurrence of `pattern` in `text`, overlapping ones included.
///
/// Returns an empty vector when the pattern is empty, longer than the text, or
/// absent from it.
///
/// # Example
///
/// ```
/// use rust_kmp::search;
///
/// assert_eq!(search(b"AABAACAADAABAABA", b"AABA"), vec![0, 9, 12]);
/// assert!(search(b"text", b"").is_empty());
/// ```
#[must_use]
pub fn search<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    search_with(text, pattern, &SearchConfig::default())
}

/// Find the first occurrence of `pattern` in `text`.
#[must_use]
pub fn search_first<T: PartialEq>(text: &[T], pattern: &[T]) -> Option<usize> {
    search_with(text, pattern, &SearchConfig::default().max_matches(1))
        .first()
        .copied()
}

/// Count occurrences of `pattern` in `text`, overlapping ones included.
#[must_use]
pub fn count<T: PartialEq>(text: &[T], pattern: &[T]) -> usize {
    let failure = build_failure_function(pattern);
    Matches::with_table(pattern, &failure, text, &SearchConfig::default()).count()
}

/// Check whether `pattern` occurs in `text`.
#[must_use]
pub fn contains<T: PartialEq>(text: &[T], pattern: &[T]) -> bool {
    search_first(text, pattern).is_some()
}

/// Find every occurrence of `pattern` in `text`, as byte offsets.
///
/// Both strings are compared as UTF-8 bytes. A valid UTF-8 pattern can only
/// match at a char boundary of valid UTF-8 text, so every offset is usable for
/// slicing `text`.
#[must_use]
pub fn search_str(text: &str, pattern: &str) -> Vec<usize> {
    search(text.as_bytes(), pattern.as_bytes())
}

/// Find every occurrence of `pattern` in `text` where either may be absent.
///
/// # Errors
///
/// Returns [`KmpError::InvalidInput`](crate::KmpError::InvalidInput) naming
/// the first absent argument (text is checked before pattern). Present but
/// empty arguments are valid.
pub fn try_search<T: PartialEq>(text: Option<&[T]>, pattern: Option<&[T]>) -> Result<Vec<usize>> {
    let (text, pattern) = validate_input(text, pattern, &ValidationOptions::permissive())?;
    Ok(search(text, pattern))
}
