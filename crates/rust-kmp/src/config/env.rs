//! Environment-based configuration.
//!
//! Recognised variables (with the default `KMP` prefix):
//!
//! | Variable            | Field                    |
//! |---------------------|--------------------------|
//! | `KMP_EMPTY_PATTERN` | `search.empty_pattern`   |
//! | `KMP_OVERLAP`       | `search.overlap`         |
//! | `KMP_MAX_MATCHES`   | `search.max_matches`     |
//! | `KMP_LOG_LEVEL`     | `logging.level`          |
//! | `KMP_LOG_FORMAT`    | `logging.format`         |

use std::collections::HashMap;

use super::{EmptyPatternPolicy, KmpConfig, LogFormat, OverlapMode};
use crate::error::{KmpError, Result};

/// Environment configuration prefix.
pub const DEFAULT_PREFIX: &str = "KMP";

/// Variable names, without the prefix.
pub mod vars {
    /// Empty pattern policy.
    pub const EMPTY_PATTERN: &str = "EMPTY_PATTERN";
    /// Overlap mode.
    pub const OVERLAP: &str = "OVERLAP";
    /// Match limit, with the same meaning as `search.max_matches` in a file
    /// (`0` reports nothing). An empty value or `none` removes the limit.
    pub const MAX_MATCHES: &str = "MAX_MATCHES";
    /// Log filter directive.
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Log format.
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Environment variable reader.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Prefix for environment variables.
    prefix: String,
    /// Values that take precedence over the process environment.
    overrides: HashMap<String, String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl EnvConfig {
    /// Create a new environment config reader.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            overrides: HashMap::new(),
        }
    }

    /// Create without a prefix.
    #[must_use]
    pub fn no_prefix() -> Self {
        Self::new(String::new())
    }

    /// Shadow a variable without touching the process environment.
    #[must_use]
    pub fn with_var(mut self, name: &str, value: impl Into<String>) -> Self {
        let var_name = self.var_name(name);
        self.overrides.insert(var_name, value.into());
        self
    }

    /// Build the full environment variable name.
    fn var_name(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_uppercase()
        } else {
            format!("{}_{}", self.prefix, name.to_uppercase())
        }
    }

    /// Get a string value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let var_name = self.var_name(name);
        self.overrides
            .get(&var_name)
            .cloned()
            .or_else(|| std::env::var(&var_name).ok())
    }

    /// Check if a variable is set.
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get and parse a value, reporting which variable was malformed.
    fn parse<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(name)
            .map(|raw| {
                raw.trim().parse::<T>().map_err(|e| {
                    KmpError::config(format!("{}={raw:?}: {e}", self.var_name(name)))
                })
            })
            .transpose()
    }

    /// Apply every recognised variable on top of `config`.
    pub fn apply(&self, mut config: KmpConfig) -> Result<KmpConfig> {
        if let Some(policy) = self.parse::<EmptyPatternPolicy>(vars::EMPTY_PATTERN)? {
            config.search.empty_pattern = policy;
        }
        if let Some(mode) = self.parse::<OverlapMode>(vars::OVERLAP)? {
            config.search.overlap = mode;
        }
        if let Some(raw) = self.get(vars::MAX_MATCHES) {
            let raw = raw.trim();
            config.search.max_matches = if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
                None
            } else {
                self.parse::<usize>(vars::MAX_MATCHES)?
            };
        }
        if let Some(level) = self.get(vars::LOG_LEVEL) {
            config.logging.level = level;
        }
        if let Some(format) = self.parse::<LogFormat>(vars::LOG_FORMAT)? {
            config.logging.format = format;
        }
        Ok(config)
    }

    /// Build a configuration from defaults plus the environment.
    pub fn load(&self) -> Result<KmpConfig> {
        self.apply(KmpConfig::default())
    }
}
