//! File-based configuration loading.

use std::path::{Path, PathBuf};

use super::KmpConfig;
use crate::error::{KmpError, Result};

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format.
    Toml,
    /// JSON format.
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from path.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Configuration file loader.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Search paths.
    search_paths: Vec<PathBuf>,
    /// Format used when the extension is missing or unknown.
    default_format: Option<ConfigFormat>,
}

impl ConfigLoader {
    /// Create a new loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a search path.
    #[must_use]
    pub fn add_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Set default format.
    #[must_use]
    pub const fn with_format(mut self, format: ConfigFormat) -> Self {
        self.default_format = Some(format);
        self
    }

    /// Find a config file by name, trying the known extensions.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        let extensions = ["toml", "json"];

        for search_path in &self.search_paths {
            let path = search_path.join(name);
            if path.is_file() {
                return Some(path);
            }

            for ext in &extensions {
                let path = search_path.join(format!("{name}.{ext}"));
                if path.is_file() {
                    return Some(path);
                }
            }
        }

        None
    }

    /// Load a config file.
    pub fn load(&self, path: &Path) -> Result<KmpConfig> {
        let content = KmpError::with_io_context(
            std::fs::read_to_string(path),
            format!("failed to read {}", path.display()),
        )?;

        let format = ConfigFormat::from_path(path)
            .or(self.default_format)
            .ok_or_else(|| {
                KmpError::config(format!("unknown config format for {}", path.display()))
            })?;

        let config = parse(&content, format)?;
        tracing::debug!(path = %path.display(), ?format, "loaded configuration");
        Ok(config)
    }

    /// Load by name (searches paths).
    pub fn load_by_name(&self, name: &str) -> Result<KmpConfig> {
        let path = self
            .find(name)
            .ok_or_else(|| KmpError::config(format!("config file not found: {name}")))?;
        self.load(&path)
    }
}

/// Parse config content.
pub fn parse(content: &str, format: ConfigFormat) -> Result<KmpConfig> {
    match format {
        ConfigFormat::Toml => Ok(toml::from_str(content)?),
        ConfigFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

/// Load a config file, detecting the format from its extension.
pub fn load(path: impl AsRef<Path>) -> Result<KmpConfig> {
    ConfigLoader::new().load(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EmptyPatternPolicy, LogFormat, OverlapMode};

    #[test]
    fn format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("TOML"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("yaml"), None);
        assert_eq!(
            ConfigFormat::from_path(Path::new("dir/kmp.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("kmp")), None);
    }

    #[test]
    fn parse_toml() {
        let config = parse(
            r#"
            [search]
            empty_pattern = "every-position"
            overlap = "non-overlapping"
            max_matches = 10

            [logging]
            level = "debug"
            format = "json"
            "#,
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.search.empty_pattern, EmptyPatternPolicy::EveryPosition);
        assert_eq!(config.search.overlap, OverlapMode::NonOverlapping);
        assert_eq!(config.search.max_matches, Some(10));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn parse_partial_toml_keeps_defaults() {
        let config = parse("[search]\nmax_matches = 1\n", ConfigFormat::Toml).unwrap();
        assert_eq!(config.search.max_matches, Some(1));
        assert_eq!(config.search.overlap, OverlapMode::Overlapping);
        assert_eq!(config.logging, crate::config::LoggingConfig::default());
    }

    #[test]
    fn parse_json() {
        let config = parse(
            r#"{"search": {"overlap": "non-overlapping"}}"#,
            ConfigFormat::Json,
        )
        .unwrap();
        assert_eq!(config.search.overlap, OverlapMode::NonOverlapping);
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let err = parse("[search]\nfuzzy = true\n", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, KmpError::Toml(_)));
        assert!(err.is_config());
    }

    #[test]
    fn load_missing_file_has_context() {
        let err = load("/nonexistent/rust-kmp/kmp.toml").unwrap_err();
        assert!(matches!(err, KmpError::IoWithContext { .. }));
    }

    #[test]
    fn loader_without_paths_finds_nothing() {
        let loader = ConfigLoader::new();
        assert!(loader.find("kmp").is_none());
        assert!(loader.load_by_name("kmp").unwrap_err().is_config());
    }
}
