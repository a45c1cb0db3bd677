//! rust-kmp: linear-time exact substring search
//!
//! This crate implements the Knuth-Morris-Pratt algorithm over any symbol type
//! that supports equality. It reports every (possibly overlapping) occurrence
//! of a pattern in `O(n + m)` time without re-reading text already consumed.
//!
//! # Features
//!
//! - **Generic symbols**: bytes, chars, or any `T: PartialEq`
//! - **Reusable matchers** that build the failure table once
//! - **Lazy iteration** over matches via [`Matches`]
//! - **Configurable semantics**: overlap mode, match limits, empty pattern policy
//! - **Matcher cache** shared across threads
//! - **Subscriber setup** for the crate's `tracing` events (feature: `logging`)
//!
//! # Example
//!
//! ```
//! use rust_kmp::prelude::*;
//!
//! assert_eq!(search(b"AABAACAADAABAABA", b"AABA"), vec![0, 9, 12]);
//!
//! let matcher = Matcher::new(b"ABABCAB")?;
//! assert_eq!(matcher.search(b"ABABDABACDABABCABCABCABCABC"), vec![10]);
//! assert_eq!(matcher.failure_function(), vec![0, 0, 1, 2, 0, 1, 2]);
//! # Ok::<(), KmpError>(())
//! ```

// Core types
pub mod config;
pub mod error;
pub mod prelude;
pub mod validation;

// Core modules
pub mod cache;
pub mod failure;
pub mod matcher;
pub mod search;

/// Subscriber setup.
#[cfg(feature = "logging")]
pub mod logging;

pub use cache::{CacheStats, GLOBAL_CACHE, MatcherCache, get_matcher};
pub use config::{
    EmptyPatternPolicy, KmpConfig, LogFormat, LoggingConfig, OverlapMode, SearchConfig,
};
pub use error::{KmpError, Result};
pub use failure::{FailureFunction, build_failure_function, try_build_failure_function};
pub use matcher::Matcher;
pub use search::{
    Matches, contains, count, search, search_first, search_str, search_with,
    search_with_failure, try_search,
};
pub use validation::{ValidationOptions, validate_input};
