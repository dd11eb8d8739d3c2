//! Configuration management for the drop-rate analyzer.
//!
//! This module handles loading and parsing configuration from TOML files,
//! with sensible defaults for all settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Genres the analyzer restricts itself to.
pub const DEFAULT_DESIRED_GENRES: [&str; 9] = [
    "Shounen", "Shoujo", "Action", "Romance", "Horror", "Mystery", "Drama", "Isekai", "Comedy",
];

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Analyzer settings
    pub analyzer: AnalyzerConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log directory path
    pub log_dir: String,

    /// Default log level (trace, debug, info, warn, error)
    pub default_level: String,

    /// Enable console output
    pub console: bool,

    /// Enable file output
    pub file: bool,

    /// Enable JSON formatting for file logs
    pub json_format: bool,
}

/// Analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Jikan API base URL
    pub base_url: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Delay applied before every statistics request, in milliseconds
    pub stats_delay_ms: u64,

    /// Number of candidates fetched when searching by name
    pub search_limit: usize,

    /// Number of titles in a genre ranking
    pub top_limit: usize,

    /// Genre names offered in the genre mode (matched case-insensitively)
    pub desired_genres: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            default_level: "info".to_string(),
            console: true,
            file: false,
            json_format: false,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.jikan.moe/v4".to_string(),
            user_agent: "drop-analyzer/0.1.0".to_string(),
            stats_delay_ms: 750,
            search_limit: 5,
            top_limit: 10,
            desired_genres: DEFAULT_DESIRED_GENRES
                .iter()
                .map(|g| g.to_string())
                .collect(),
        }
    }
}

impl AnalyzerConfig {
    /// Delay applied before each statistics request
    pub fn stats_delay(&self) -> Duration {
        Duration::from_millis(self.stats_delay_ms)
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// If the file doesn't exist, returns the default configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                path = %path.display(),
                "Config file not found, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(
            path = %path.display(),
            "Configuration saved successfully"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analyzer.base_url, "https://api.jikan.moe/v4");
        assert_eq!(config.analyzer.stats_delay(), Duration::from_millis(750));
        assert_eq!(config.analyzer.search_limit, 5);
        assert_eq!(config.analyzer.top_limit, 10);
        assert_eq!(config.analyzer.desired_genres.len(), 9);
        assert!(config
            .analyzer
            .desired_genres
            .iter()
            .any(|g| g == "Isekai"));
    }

    #[test]
    fn test_save_and_load_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut original_config = Config::default();
        original_config.analyzer.stats_delay_ms = 1200;
        original_config.analyzer.desired_genres = vec!["Horror".to_string()];
        original_config.save(&config_path)?;

        assert!(config_path.exists());

        let loaded_config = Config::from_file(&config_path)?;
        assert_eq!(loaded_config.analyzer.stats_delay_ms, 1200);
        assert_eq!(loaded_config.analyzer.desired_genres, vec!["Horror"]);
        assert_eq!(
            loaded_config.analyzer.base_url,
            original_config.analyzer.base_url
        );

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_config() -> Result<()> {
        let config = Config::from_file("nonexistent.toml")?;
        // Should return default config without error
        assert_eq!(config.analyzer.top_limit, 10);
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[analyzer]\nstats_delay_ms = \"soon\"\n")?;

        assert!(Config::from_file(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_partial_config_keeps_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[analyzer]\nstats_delay_ms = 1000\n")?;

        let config = Config::from_file(&config_path)?;
        assert_eq!(config.analyzer.stats_delay(), Duration::from_millis(1000));
        assert_eq!(config.analyzer.base_url, "https://api.jikan.moe/v4");
        assert_eq!(config.analyzer.desired_genres.len(), 9);
        assert_eq!(config.logging.default_level, "info");
        Ok(())
    }
}
