//! Board configuration.
//!
//! Loaded from an optional YAML file, then overridden from the environment:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `ORDER_BOARD_CONFIG` | Path to a YAML file. Unset means built-in defaults. |
//! | `ORDER_BOARD_OVERDUE_SECS` | Overrides `overdue_threshold_secs`. |
//!
//! ```yaml
//! overdue_threshold_secs: 240
//! mailbox_capacity: 32
//! ```

use chrono::Duration;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "ORDER_BOARD_CONFIG";
pub const OVERDUE_SECS_ENV: &str = "ORDER_BOARD_OVERDUE_SECS";

const DEFAULT_OVERDUE_THRESHOLD_SECS: u64 = 4 * 60;
const DEFAULT_MAILBOX_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Waiting time after which an active order is flagged overdue.
    pub overdue_threshold_secs: u64,
    /// Bounded mailbox size of the Order actor.
    pub mailbox_capacity: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            overdue_threshold_secs: DEFAULT_OVERDUE_THRESHOLD_SECS,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }
}

impl BoardConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()
    }

    /// File from `ORDER_BOARD_CONFIG` (or defaults), then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        config.with_overrides(std::env::var(OVERDUE_SECS_ENV).ok().as_deref())
    }

    fn with_overrides(mut self, overdue_secs: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = overdue_secs {
            self.overdue_threshold_secs = raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{OVERDUE_SECS_ENV} must be whole seconds, got {raw:?}"
                ))
            })?;
        }
        self.validate()
    }

    /// Checks ranges. Loaders call this; so does `BoardSystem::new` for configs
    /// built by hand.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.mailbox_capacity == 0 {
            return Err(ConfigError::Invalid(
                "mailbox_capacity must be at least 1".to_string(),
            ));
        }
        if threshold_from_secs(self.overdue_threshold_secs).is_none() {
            return Err(ConfigError::Invalid(format!(
                "overdue_threshold_secs out of range: {}",
                self.overdue_threshold_secs
            )));
        }
        Ok(self)
    }

    pub fn overdue_threshold(&self) -> Duration {
        // Range checked in validate(); saturate for hand-built configs.
        threshold_from_secs(self.overdue_threshold_secs).unwrap_or(Duration::MAX)
    }
}

fn threshold_from_secs(secs: u64) -> Option<Duration> {
    i64::try_from(secs).ok().and_then(Duration::try_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.overdue_threshold_secs, 240);
        assert_eq!(config.mailbox_capacity, 32);
        assert_eq!(config.overdue_threshold(), Duration::minutes(4));
    }

    #[test]
    fn test_yaml_with_partial_fields_keeps_defaults() {
        let config = BoardConfig::from_yaml_str("overdue_threshold_secs: 90\n").unwrap();
        assert_eq!(config.overdue_threshold(), Duration::seconds(90));
        assert_eq!(config.mailbox_capacity, 32);
    }

    #[test]
    fn test_yaml_rejects_unknown_fields_and_zero_mailbox() {
        assert!(matches!(
            BoardConfig::from_yaml_str("overdue_minutes: 4\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            BoardConfig::from_yaml_str("mailbox_capacity: 0\n"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_env_override() {
        let config = BoardConfig::default().with_overrides(Some("300")).unwrap();
        assert_eq!(config.overdue_threshold_secs, 300);

        let err = BoardConfig::default().with_overrides(Some("four")).unwrap_err();
        assert!(err.to_string().contains(OVERDUE_SECS_ENV));
    }

    #[test]
    fn test_missing_file() {
        let err = BoardConfig::from_file("/nonexistent/board.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
