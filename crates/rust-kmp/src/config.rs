//! Configuration types for rust-kmp.
//!
//! This module defines the search options that callers may tune (empty
//! pattern convention, overlap handling, match limits) and the logging
//! options used by the optional subscriber setup. Both can be loaded from a
//! file (see [`file`]) and overridden from the environment (see [`env`]).

pub mod env;
pub mod file;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KmpError;

/// Default log level filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KmpConfig {
    /// Search behaviour.
    pub search: SearchConfig,

    /// Logging behaviour.
    pub logging: LoggingConfig,
}

impl KmpConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search configuration.
    #[must_use]
    pub const fn search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Replace the logging configuration.
    #[must_use]
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }
}

/// Options that change what a search reports.
///
/// The defaults reproduce classic KMP: every occurrence, overlapping ones
/// included, and no matches for an empty pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// What an empty pattern matches.
    pub empty_pattern: EmptyPatternPolicy,

    /// Whether occurrences may share text positions.
    pub overlap: OverlapMode,

    /// Stop after this many matches.
    pub max_matches: Option<usize>,
}

impl SearchConfig {
    /// Create a search configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the empty pattern policy.
    #[must_use]
    pub const fn empty_pattern(mut self, policy: EmptyPatternPolicy) -> Self {
        self.empty_pattern = policy;
        self
    }

    /// Set the overlap mode.
    #[must_use]
    pub const fn overlap(mut self, mode: OverlapMode) -> Self {
        self.overlap = mode;
        self
    }

    /// Limit the number of reported matches.
    #[must_use]
    pub const fn max_matches(mut self, limit: usize) -> Self {
        self.max_matches = Some(limit);
        self
    }

    /// Remove any match limit.
    #[must_use]
    pub const fn unlimited(mut self) -> Self {
        self.max_matches = None;
        self
    }
}

/// What an empty pattern matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPatternPolicy {
    /// An empty pattern never matches.
    #[default]
    NoMatches,

    /// An empty pattern matches at every position `0..=text.len()`.
    EveryPosition,
}

impl EmptyPatternPolicy {
    /// Name used in configuration files and environment variables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoMatches => "no-matches",
            Self::EveryPosition => "every-position",
        }
    }
}

impl fmt::Display for EmptyPatternPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmptyPatternPolicy {
    type Err = KmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "no-matches" | "none" => Ok(Self::NoMatches),
            "every-position" | "all" => Ok(Self::EveryPosition),
            other => Err(KmpError::config(format!(
                "unknown empty pattern policy '{other}'"
            ))),
        }
    }
}

/// How occurrences that share text positions are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapMode {
    /// Report every occurrence; after a match the automaton falls back to the
    /// pattern's longest border.
    #[default]
    Overlapping,

    /// Report occurrences left to right, each starting after the previous one
    /// ends; after a match the automaton restarts from state zero.
    NonOverlapping,
}

impl OverlapMode {
    /// Name used in configuration files and environment variables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overlapping => "overlapping",
            Self::NonOverlapping => "non-overlapping",
        }
    }
}

impl fmt::Display for OverlapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlapMode {
    type Err = KmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overlapping" | "true" | "yes" | "on" => Ok(Self::Overlapping),
            "non-overlapping" | "false" | "no" | "off" => Ok(Self::NonOverlapping),
            other => Err(KmpError::config(format!("unknown overlap mode '{other}'"))),
        }
    }
}

/// Configuration for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive (e.g., "info", "`rust_kmp=trace`").
    pub level: String,

    /// Log format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter directive.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Set the log format.
    #[must_use]
    pub const fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Log format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    Text,

    /// Newline-delimited JSON.
    Json,
}

impl FromStr for LogFormat {
    type Err = KmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" | "ndjson" => Ok(Self::Json),
            other => Err(KmpError::config(format!("unknown log format '{other}'"))),
        }
    }
}
