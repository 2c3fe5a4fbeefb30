//! Menu configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `LACAPKE_DATA_DIR` - Directory backing the local store (default: `.lacapke`)
//! - `LACAPKE_ADMIN_USERNAME` - Username that unlocks admin mode (default: `Admin1`)
//! - `LACAPKE_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".lacapke";
const DEFAULT_ADMIN_USERNAME: &str = "Admin1";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// Menu application configuration.
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Directory holding one JSON file per persisted key
    pub data_dir: PathBuf,
    /// Username whose login switches the session to admin
    pub admin_username: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl MenuConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("LACAPKE_DATA_DIR", DEFAULT_DATA_DIR));
        let admin_username =
            get_env_or_default("LACAPKE_ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME);
        if admin_username.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "LACAPKE_ADMIN_USERNAME".to_string(),
                "must not be blank".to_string(),
            ));
        }
        let log_format = get_env_or_default("LACAPKE_LOG_FORMAT", "pretty")
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::InvalidEnvVar("LACAPKE_LOG_FORMAT".to_string(), e))?;

        Ok(Self {
            data_dir,
            admin_username,
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!(" Pretty ".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".lacapke"));
        assert_eq!(config.admin_username, "Admin1");
        assert_eq!(config.log_format, LogFormat::Pretty);
    }
}
