use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration, loaded from a TOML file with serde defaults for
/// every missing section.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads configuration from `path`, falling back to defaults when no
    /// path is given, then applies CLI overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                let contents = std::fs::read_to_string(p).map_err(|source| ConfigError::Io {
                    path: p.to_string(),
                    source,
                })?;
                toml::from_str(&contents).map_err(|e| ConfigError::Parse {
                    path: p.to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        if let Some(db_path) = overrides.database_path {
            config.database.path = db_path;
        }
        if let Some(level) = overrides.log_level {
            config.logging.level = level;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "database.path must not be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Invalid(format!(
                "database.min_connections ({}) exceeds max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level '{}' is not one of {:?}",
                self.logging.level, VALID_LOG_LEVELS
            )));
        }

        Ok(())
    }
}
