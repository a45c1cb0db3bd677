//! Reusable matcher bound to a single pattern.
//!
//! A [`Matcher`] owns its pattern and the failure table built from it. Both
//! are computed once in `O(m)` and never change afterwards; each search keeps
//! its scan state in a fresh [`Matches`] value, so one matcher can serve any
//! number of searches, including concurrent ones through an `Arc`.

use crate::config::SearchConfig;
use crate::error::{KmpError, Result};
use crate::failure::{FailureFunction, build_failure_function};
use crate::search::Matches;
use crate::validation::{ValidationOptions, validate_pattern, validate_text};

/// A pattern with its precomputed failure table.
///
/// # Example
///
/// ```
/// use rust_kmp::Matcher;
///
/// let matcher = Matcher::new(b"ana")?;
/// assert_eq!(matcher.search(b"banana"), vec![1, 3]);
/// assert_eq!(matcher.failure_function(), vec![0, 0, 1]);
/// # Ok::<(), rust_kmp::KmpError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matcher<T> {
    pattern: Box<[T]>,
    failure: FailureFunction,
    config: SearchConfig,
}

impl<T: PartialEq + Clone> Matcher<T> {
    /// Create a matcher for `pattern` with default search options.
    ///
    /// # Errors
    ///
    /// Returns [`KmpError::InvalidInput`] if `pattern` is empty.
    pub fn new(pattern: &[T]) -> Result<Self> {
        Self::with_config(pattern, SearchConfig::default())
    }

    /// Create a matcher for `pattern` with custom search options.
    ///
    /// # Errors
    ///
    /// Returns [`KmpError::InvalidInput`] if `pattern` is empty.
    pub fn with_config(pattern: &[T], config: SearchConfig) -> Result<Self> {
        let pattern = validate_pattern(Some(pattern), &ValidationOptions::strict())?;
        Ok(Self::build(pattern.into(), config))
    }

    /// Create a matcher for a pattern that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`KmpError::InvalidInput`] if `pattern` is absent or empty.
    pub fn try_new(pattern: Option<&[T]>) -> Result<Self> {
        let pattern = validate_pattern(pattern, &ValidationOptions::strict())?;
        Ok(Self::build(pattern.into(), SearchConfig::default()))
    }
}

impl<T: PartialEq> Matcher<T> {
    fn build(pattern: Box<[T]>, config: SearchConfig) -> Self {
        let failure = build_failure_function(&pattern);
        tracing::debug!(
            pattern.len = pattern.len(),
            period = failure.period(),
            overlap = %config.overlap,
            "created matcher"
        );
        Self {
            pattern,
            failure,
            config,
        }
    }

    /// Create a matcher that takes ownership of `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`KmpError::InvalidInput`] if `pattern` is empty.
    pub fn from_vec(pattern: Vec<T>, config: SearchConfig) -> Result<Self> {
        if pattern.is_empty() {
            return Err(KmpError::invalid_input("pattern", "pattern cannot be empty"));
        }
        Ok(Self::build(pattern.into_boxed_slice(), config))
    }

    /// Find every occurrence of the pattern in `text`.
    #[must_use]
    pub fn search(&self, text: &[T]) -> Vec<usize> {
        let offsets: Vec<usize> = self.find_iter(text).collect();
        tracing::trace!(
            text.len = text.len(),
            matches = offsets.len(),
            "matcher search complete"
        );
        offsets
    }

    /// Lazily iterate over occurrences of the pattern in `text`.
    #[must_use]
    pub fn find_iter<'t>(&self, text: &'t [T]) -> Matches<'_, 't, T> {
        Matches::with_table(&self.pattern, &self.failure, text, &self.config)
    }

    /// Find the first occurrence of the pattern in `text`.
    #[must_use]
    pub fn search_first(&self, text: &[T]) -> Option<usize> {
        self.find_iter(text).next()
    }

    /// Count occurrences of the pattern in `text`.
    #[must_use]
    pub fn count(&self, text: &[T]) -> usize {
        self.find_iter(text).count()
    }

    /// Check whether the pattern occurs in `text`.
    #[must_use]
    pub fn contains(&self, text: &[T]) -> bool {
        self.search_first(text).is_some()
    }

    /// Search a text that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`KmpError::InvalidInput`] if `text` is absent.
    pub fn try_search(&self, text: Option<&[T]>) -> Result<Vec<usize>> {
        validate_text(text).map(|text| self.search(text))
    }

    /// The pattern this matcher searches for.
    #[must_use]
    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// Length of the pattern (always at least one).
    #[must_use]
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// A copy of the failure table.
    #[must_use]
    pub fn failure_function(&self) -> Vec<usize> {
        self.failure.to_vec()
    }

    /// Read-only view of the failure table.
    #[must_use]
    pub const fn failure_table(&self) -> &FailureFunction {
        &self.failure
    }

    /// The search options this matcher was built with.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Matcher<u8> {
    /// Create a byte matcher from a string pattern.
    ///
    /// # Errors
    ///
    /// Returns [`KmpError::InvalidInput`] if `pattern` is empty.
    pub fn from_str_pattern(pattern: &str) -> Result<Self> {
        Self::new(pattern.as_bytes())
    }

    /// Find every occurrence in `text`, as byte offsets.
    #[must_use]
    pub fn search_str(&self, text: &str) -> Vec<usize> {
        self.search(text.as_bytes())
    }
}

impl<T: PartialEq> TryFrom<Vec<T>> for Matcher<T> {
    type Error = KmpError;

    fn try_from(pattern: Vec<T>) -> Result<Self> {
        Self::from_vec(pattern, SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::OverlapMode;

    #[test]
    fn matcher_search() {
        let matcher = Matcher::new(b"AABA").unwrap();
        assert_eq!(matcher.search(b"AABAACAADAABAABA"), vec![0, 9, 12]);
        assert_eq!(matcher.pattern(), b"AABA");
        assert_eq!(matcher.pattern_len(), 4);
    }

    #[test]
    fn matcher_rejects_empty_pattern() {
        let err = Matcher::<u8>::new(&[]).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(Matcher::<u8>::try_new(None).unwrap_err().is_invalid_input());
        assert!(Matcher::<char>::try_from(Vec::new()).is_err());
    }

    #[test]
    fn failure_function_is_a_copy() {
        let matcher = Matcher::new(b"ABABCABAB").unwrap();
        let mut copy = matcher.failure_function();
        copy[0] = 99;
        assert_eq!(copy[0], 99);
        assert_eq!(matcher.failure_table()[0], 0);
        assert_eq!(matcher.failure_function(), vec![0, 0, 1, 2, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn repeated_searches_agree() {
        let matcher = Matcher::new(b"ab").unwrap();
        let first = matcher.search(b"abcabcab");
        let second = matcher.search(b"abcabcab");
        assert_eq!(first, vec![0, 3, 6]);
        assert_eq!(first, second);
        assert_eq!(matcher.search(b"zzz"), Vec::<usize>::new());
        assert_eq!(matcher.search(b"abcabcab"), first);
    }

    #[test]
    fn first_count_contains() {
        let matcher = Matcher::from_str_pattern("world").unwrap();
        assert_eq!(matcher.search_first(b"hello world"), Some(6));
        assert_eq!(matcher.count(b"world world"), 2);
        assert!(!matcher.contains(b"word"));
        assert_eq!(matcher.search_str("a world of worlds"), vec![2, 11]);
    }

    #[test]
    fn try_search_rejects_absent_text() {
        let matcher = Matcher::new(b"x").unwrap();
        assert_eq!(matcher.try_search(None).unwrap_err().argument(), Some("text"));
        assert_eq!(matcher.try_search(Some(&b""[..])).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn config_is_honoured() {
        let config = SearchConfig::default().overlap(OverlapMode::NonOverlapping);
        let matcher = Matcher::with_config(b"aa", config).unwrap();
        assert_eq!(matcher.search(b"aaaaa"), vec![0, 2]);
        assert_eq!(matcher.config().overlap, OverlapMode::NonOverlapping);
    }

    #[test]
    fn shared_across_threads() {
        let matcher = Arc::new(Matcher::new(b"needle").unwrap());
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let matcher = Arc::clone(&matcher);
                std::thread::spawn(move || {
                    let mut text = vec![b'.'; n * 10];
                    text.extend_from_slice(b"needle");
                    matcher.search(&text)
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), vec![n * 10]);
        }
    }
}
