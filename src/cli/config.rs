//! Configuration file
//!
//! Optional JSON file; every field has a default. Command-line flags
//! override what the file says.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::briefing::Policy;
use crate::http_server::HttpServerConfig;
use crate::site::ListingSource;
use crate::view::Theme;

use super::errors::{CliError, CliResult};

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./briefings.json";

/// Environment variable that switches request logs to JSON
pub const LOG_JSON_ENV: &str = "BRIEFINGS_LOG_JSON";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Briefing directory (default: "public/json")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Handling of missing identity fields (default: strict)
    #[serde(default)]
    pub policy: Policy,

    /// Page theme (default: light)
    #[serde(default)]
    pub theme: Theme,

    /// Listing source (default: scan)
    #[serde(default)]
    pub listing_source: ListingSource,

    #[serde(default)]
    pub server: HttpServerConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("public/json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            policy: Policy::default(),
            theme: Theme::default(),
            listing_source: ListingSource::default(),
            server: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Loads the explicit path, or the default file when it exists, or
    /// falls back to defaults.
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }

        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }

        if self.server.port == 0 {
            return Err(CliError::config_error("server.port must be > 0"));
        }

        Ok(())
    }

    pub fn with_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn with_theme(mut self, theme: Option<Theme>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    /// JSON request logs, from the file or the environment
    pub fn log_json(&self) -> bool {
        self.server.log_json
            || std::env::var(LOG_JSON_ENV)
                .map(|v| matches!(v.as_str(), "1" | "true"))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_from_empty_object() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("public/json"));
        assert_eq!(config.policy, Policy::Strict);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.listing_source, ListingSource::Scan);
    }

    #[test]
    fn test_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("briefings.json");
        fs::write(
            &path,
            r#"{"data_dir":"briefs","policy":"lenient","theme":"dark","listing_source":"index","server":{"port":8080}}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("briefs"));
        assert_eq!(config.policy, Policy::Lenient);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.listing_source, ListingSource::Index);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("briefings.json");
        fs::write(&path, "{").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.code_str(), "BRIEFINGS_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_rejects_zero_port() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("briefings.json");
        fs::write(&path, r#"{"server":{"port":0}}"#).unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Config::resolve(Some(&temp_dir.path().join("nope.json"))).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .with_data_dir(Some(PathBuf::from("outro")))
            .with_theme(Some(Theme::Dark))
            .with_port(Some(4000))
            .with_port(None);

        assert_eq!(config.data_dir, PathBuf::from("outro"));
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.server.port, 4000);
    }
}
