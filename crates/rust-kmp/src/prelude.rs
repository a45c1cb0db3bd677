//! Convenient re-exports for common rust-kmp usage.
//!
//! # Example
//!
//! ```
//! use rust_kmp::prelude::*;
//!
//! let matcher = Matcher::from_str_pattern("ana")?;
//! assert_eq!(matcher.search_str("banana"), vec![1, 3]);
//! # Ok::<(), KmpError>(())
//! ```

// Configuration
pub use crate::config::{EmptyPatternPolicy, OverlapMode, SearchConfig};

// Error handling
pub use crate::error::{KmpError, Result};

// Failure function
pub use crate::failure::{FailureFunction, build_failure_function};

// Searching
pub use crate::matcher::Matcher;
pub use crate::search::{Matches, search, search_first, search_str, search_with};
