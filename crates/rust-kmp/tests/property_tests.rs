//! Property tests against a brute-force oracle.

use proptest::prelude::*;
use rust_kmp::{
    Matcher, OverlapMode, SearchConfig, build_failure_function, count, search, search_first,
    search_with,
};

/// Check every start position directly.
fn naive_search<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&start| text[start..start + pattern.len()] == *pattern)
        .collect()
}

/// Longest proper border of `prefix`, by trying every length.
fn naive_border(prefix: &[u8]) -> usize {
    (0..prefix.len())
        .rev()
        .find(|&len| prefix[..len] == prefix[prefix.len() - len..])
        .unwrap_or(0)
}

/// Greedy left-to-right selection of non-overlapping occurrences.
fn naive_non_overlapping(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let mut next_free = 0;
    naive_search(text, pattern)
        .into_iter()
        .filter(|&start| {
            if start >= next_free {
                next_free = start + pattern.len();
                true
            } else {
                false
            }
        })
        .collect()
}

/// Small alphabets make repeated structure (and overlaps) likely.
fn small_alphabet(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..max_len)
}

proptest! {
    #[test]
    fn matches_brute_force(text in small_alphabet(64), pattern in small_alphabet(6)) {
        prop_assert_eq!(search(&text, &pattern), naive_search(&text, &pattern));
    }

    #[test]
    fn matches_brute_force_binary(
        text in prop::collection::vec(0u8..2, 0..128),
        pattern in prop::collection::vec(0u8..2, 1..10),
    ) {
        prop_assert_eq!(search(&text, &pattern), naive_search(&text, &pattern));
    }

    #[test]
    fn failure_table_invariants(pattern in small_alphabet(32)) {
        let failure = build_failure_function(&pattern);
        prop_assert_eq!(failure.len(), pattern.len());
        if !pattern.is_empty() {
            prop_assert_eq!(failure[0], 0);
        }
        for (i, value) in failure.iter().enumerate() {
            prop_assert!(value <= i);
            prop_assert_eq!(value, naive_border(&pattern[..=i]));
        }
    }

    #[test]
    fn offsets_strictly_increase(text in small_alphabet(64), pattern in small_alphabet(4)) {
        let hits = search(&text, &pattern);
        prop_assert!(hits.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(hits.iter().all(|&at| at + pattern.len() <= text.len()));
    }

    #[test]
    fn pattern_found_in_itself(pattern in prop::collection::vec(any::<u8>(), 1..32)) {
        prop_assert_eq!(search(&pattern, &pattern), vec![0]);
    }

    #[test]
    fn matcher_is_deterministic(text in small_alphabet(64), pattern in small_alphabet(5)) {
        prop_assume!(!pattern.is_empty());
        let a = Matcher::new(&pattern).unwrap();
        let b = Matcher::new(&pattern).unwrap();
        let first = a.search(&text);
        prop_assert_eq!(&first, &a.search(&text));
        prop_assert_eq!(&first, &b.search(&text));
        prop_assert_eq!(first, search(&text, &pattern));
    }

    #[test]
    fn derived_operations_agree(text in small_alphabet(64), pattern in small_alphabet(4)) {
        let hits = naive_search(&text, &pattern);
        prop_assert_eq!(count(&text, &pattern), hits.len());
        prop_assert_eq!(search_first(&text, &pattern), hits.first().copied());
    }

    #[test]
    fn non_overlapping_is_greedy(text in small_alphabet(64), pattern in small_alphabet(4)) {
        let config = SearchConfig::new().overlap(OverlapMode::NonOverlapping);
        prop_assert_eq!(
            search_with(&text, &pattern, &config),
            naive_non_overlapping(&text, &pattern)
        );
    }

    #[test]
    fn match_limit_truncates(
        text in small_alphabet(64),
        pattern in small_alphabet(3),
        limit in 0usize..5,
    ) {
        let config = SearchConfig::new().max_matches(limit);
        let mut expected = naive_search(&text, &pattern);
        expected.truncate(limit);
        prop_assert_eq!(search_with(&text, &pattern, &config), expected);
    }
}
