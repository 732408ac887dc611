//! Configuration management for sift.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Scanner configuration.
///
/// This is loaded from `~/.config/sift/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum file size to decode, in bytes. Larger files are recorded as
    /// decode failures rather than read into memory.
    pub max_file_size: u64,
    /// Maximum nesting depth for archives-within-archives.
    pub max_archive_depth: usize,
    /// Maximum number of files decoded and detected concurrently.
    pub max_concurrent_files: usize,
    /// Timeout for expanding a single archive, in seconds.
    pub extraction_timeout_secs: u64,
    /// Timeout for one named-entity-recognition invocation, in seconds.
    pub ner_timeout_secs: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024,
            max_archive_depth: 5,
            max_concurrent_files: 8,
            extraction_timeout_secs: 60,
            ner_timeout_secs: 30,
        }
    }
}

impl ScanConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `SIFT_MAX_FILE_SIZE`: Override maximum decodable file size (bytes)
    /// - `SIFT_MAX_ARCHIVE_DEPTH`: Override archive nesting bound
    /// - `SIFT_MAX_CONCURRENT_FILES`: Override worker-pool width
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        // Override from environment
        if let Ok(val) = std::env::var("SIFT_MAX_FILE_SIZE") {
            if let Ok(bytes) = val.parse() {
                config.max_file_size = bytes;
                tracing::debug!("Override max_file_size from env: {}", bytes);
            }
        }

        if let Ok(val) = std::env::var("SIFT_MAX_ARCHIVE_DEPTH") {
            if let Ok(depth) = val.parse() {
                config.max_archive_depth = depth;
                tracing::debug!("Override max_archive_depth from env: {}", depth);
            }
        }

        if let Ok(val) = std::env::var("SIFT_MAX_CONCURRENT_FILES") {
            if let Ok(workers) = val.parse() {
                config.max_concurrent_files = workers;
                tracing::debug!("Override max_concurrent_files from env: {}", workers);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Check field constraints that a TOML file or env override could violate.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_concurrent_files == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrent_files".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_archive_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_archive_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/sift/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("io", "sift", "sift").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.max_archive_depth, 5);
        assert_eq!(config.max_concurrent_files, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = ScanConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ScanConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.max_file_size, config.max_file_size);
        assert_eq!(parsed.ner_timeout_secs, config.ner_timeout_secs);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed: ScanConfig = toml::from_str("max_archive_depth = 2").unwrap();
        assert_eq!(parsed.max_archive_depth, 2);
        assert_eq!(parsed.max_concurrent_files, ScanConfig::default().max_concurrent_files);
    }

    #[test]
    fn test_env_override_wins_over_default() {
        // No other test touches this variable, so setting it here is safe
        // even under the parallel test runner.
        std::env::set_var("SIFT_MAX_ARCHIVE_DEPTH", "3");
        let loaded = ScanConfig::load_with_env();
        std::env::remove_var("SIFT_MAX_ARCHIVE_DEPTH");

        let config = loaded.unwrap();
        assert_eq!(config.max_archive_depth, 3);
    }

    #[test]
    fn test_env_override_ignores_unparseable_value() {
        let baseline = ScanConfig::load().unwrap().max_concurrent_files;

        std::env::set_var("SIFT_MAX_CONCURRENT_FILES", "lots");
        let loaded = ScanConfig::load_with_env();
        std::env::remove_var("SIFT_MAX_CONCURRENT_FILES");

        assert_eq!(loaded.unwrap().max_concurrent_files, baseline);
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let config = ScanConfig {
            max_concurrent_files: 0,
            ..ScanConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
