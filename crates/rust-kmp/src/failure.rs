//! Failure function (prefix table) construction.
//!
//! For a pattern `p` of length `m`, the failure function `f` has exactly `m`
//! entries and `f[i]` is the length of the longest proper prefix of
//! `p[0..=i]` that is also a suffix of `p[0..=i]`. The search engine uses it
//! to resume a partial match after a mismatch without moving backwards in the
//! text.

use std::fmt;
use std::ops::Index;

use crate::error::{KmpError, Result};

/// Immutable failure table for a single pattern.
///
/// Invariants: `len() == pattern.len()`, `self[0] == 0` for non-empty
/// patterns, and `self[i] <= i` for every `i`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FailureFunction {
    table: Box<[usize]>,
}

impl FailureFunction {
    /// Number of entries (equal to the pattern length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Check if the table is empty (built from an empty pattern).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Get the entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.table.get(index).copied()
    }

    /// Borrow the table as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.table
    }

    /// Copy the table into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.table.to_vec()
    }

    /// Iterate over the entries.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, usize>> {
        self.table.iter().copied()
    }

    /// Length of the longest proper border of the whole pattern.
    ///
    /// This is the automaton state the engine falls back to after reporting a
    /// match, so it is also the amount by which two consecutive occurrences
    /// may overlap. Zero for an empty pattern.
    #[must_use]
    pub fn longest_border(&self) -> usize {
        self.table.last().copied().unwrap_or(0)
    }

    /// Smallest period of the pattern (`len() - longest_border()`).
    #[must_use]
    pub fn period(&self) -> usize {
        self.len() - self.longest_border()
    }
}

impl Index<usize> for FailureFunction {
    type Output = usize;

    fn index(&self, index: usize) -> &Self::Output {
        &self.table[index]
    }
}

impl AsRef<[usize]> for FailureFunction {
    fn as_ref(&self) -> &[usize] {
        &self.table
    }
}

impl From<FailureFunction> for Vec<usize> {
    fn from(value: FailureFunction) -> Self {
        value.table.into_vec()
    }
}

impl<'a> IntoIterator for &'a FailureFunction {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FailureFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.table.iter()).finish()
    }
}

/// Build the failure function for `pattern`.
///
/// An empty pattern yields an empty table. Runs in `O(m)` amortised time: the
/// running border length only grows by one per position and every fallback
/// strictly shrinks it.
///
/// # Example
///
/// ```
/// use rust_kmp::build_failure_function;
///
/// let table = build_failure_function(b"ABABCABAB");
/// assert_eq!(table.as_slice(), &[0, 0, 1, 2, 0, 1, 2, 3, 4]);
/// ```
#[must_use]
pub fn build_failure_function<T: PartialEq>(pattern: &[T]) -> FailureFunction {
    let mut table = vec![0; pattern.len()];
    let mut len = 0;

    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = table[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
        }
        table[i] = len;
    }

    tracing::trace!(
        pattern.len = pattern.len(),
        longest_border = len,
        "built failure function"
    );

    FailureFunction {
        table: table.into_boxed_slice(),
    }
}

/// Build the failure function for a pattern that may be absent.
///
/// # Errors
///
/// Returns [`KmpError::InvalidInput`] if `pattern` is `None`. A present but
/// empty pattern is valid and yields an empty table.
pub fn try_build_failure_function<T: PartialEq>(pattern: Option<&[T]>) -> Result<FailureFunction> {
    pattern
        .map(build_failure_function)
        .ok_or_else(|| KmpError::absent("pattern"))
}
