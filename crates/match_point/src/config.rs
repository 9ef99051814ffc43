//! Match configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use match_point_tictactoe::DEFAULT_TARGET_WINS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for a match_point run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Round wins needed to become champion.
    target_wins: u32,

    /// File receiving log output while the terminal UI owns the screen.
    log_file: PathBuf,

    /// Default `tracing` filter, used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            target_wins: DEFAULT_TARGET_WINS,
            log_file: PathBuf::from("match_point.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(target_wins = config.target_wins, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Applies command-line overrides on top of this configuration.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        target_wins: Option<u32>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(target_wins) = target_wins {
            self.target_wins = target_wins;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.target_wins == 0 {
            return Err(ConfigError::new(
                "target_wins must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = MatchConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, MatchConfig::default());
        assert_eq!(*config.target_wins(), 3);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "target_wins = 5").unwrap();

        let config = MatchConfig::load(file.path()).unwrap();
        assert_eq!(*config.target_wins(), 5);
        assert_eq!(config.log_file(), &PathBuf::from("match_point.log"));
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_zero_target_rejected() {
        let err = MatchConfig::from_toml("target_wins = 0").unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let err = MatchConfig::from_toml("target_wins = \"three\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = MatchConfig::from_toml("target_wins = 5\nlog_filter = \"debug\"")
            .unwrap()
            .with_overrides(Some(2), Some(PathBuf::from("other.log")))
            .unwrap();
        assert_eq!(*config.target_wins(), 2);
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
        assert_eq!(config.log_filter(), "debug");

        assert!(
            MatchConfig::default()
                .with_overrides(Some(0), None)
                .is_err()
        );
    }

    #[test]
    fn test_to_toml_parses_back() {
        let config = MatchConfig::default().with_overrides(Some(4), None).unwrap();
        let text = config.to_toml().unwrap();
        assert!(text.contains("target_wins = 4"));
        assert_eq!(MatchConfig::from_toml(&text).unwrap(), config);
    }
}
