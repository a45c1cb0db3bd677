//! Error types for rust-kmp.
//!
//! The search core only raises [`KmpError::InvalidInput`], when:
//!
//! - a required argument is absent
//! - a [`Matcher`](crate::Matcher) pattern is empty
//! - a precomputed failure table does not fit the pattern passed with it
//!
//! Every other input, including empty text and patterns longer than the text,
//! is valid and produces a well-defined result. The remaining variants are only
//! produced while loading configuration.

use thiserror::Error;

/// The main error type for rust-kmp operations.
#[derive(Debug, Error)]
pub enum KmpError {
    /// A required argument was absent or unusable.
    #[error("invalid {argument}: {reason}")]
    InvalidInput {
        /// Which argument was rejected (e.g., "pattern", "text").
        argument: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An I/O error occurred with additional context.
    #[error("{context}: {source}")]
    IoWithContext {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A TOML configuration document failed to parse.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON configuration document failed to parse.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for rust-kmp operations.
pub type Result<T> = std::result::Result<T, KmpError>;

impl KmpError {
    /// Create an invalid input error.
    pub fn invalid_input(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            argument,
            reason: reason.into(),
        }
    }

    /// Create an invalid input error for an absent argument.
    #[must_use]
    pub fn absent(argument: &'static str) -> Self {
        Self::invalid_input(argument, format!("{argument} cannot be absent"))
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error with context.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoWithContext {
            context: context.into(),
            source,
        }
    }

    /// Wrap an I/O result with context.
    pub fn with_io_context<T>(result: std::io::Result<T>, context: impl Into<String>) -> Result<T> {
        result.map_err(|e| Self::io_context(context, e))
    }

    /// Check if this is an invalid input error.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Check if this error came from configuration loading.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::Toml(_) | Self::Json(_) | Self::IoWithContext { .. }
        )
    }

    /// Get the rejected argument name if this is an invalid input error.
    #[must_use]
    pub const fn argument(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { argument, .. } => Some(*argument),
            _ => None,
        }
    }
}
