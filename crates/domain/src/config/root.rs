use serde::{Deserialize, Serialize};
use std::path::Path;

use super::drupal::DrupalConfig;
use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use super::sampler::SamplerConfig;
use super::server::ServerConfig;
use super::store::StoreConfig;

const LOCAL_CONFIG_PATH: &str = "keyscope.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/keyscope/config.toml";

/// Main configuration structure for Keyscope
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Web server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Key-value store connection
    #[serde(default)]
    pub store: StoreConfig,

    /// Drupal cache-key report and search limits
    #[serde(default)]
    pub drupal: DrupalConfig,

    /// Background info sampler
    #[serde(default)]
    pub sampler: SamplerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. keyscope.toml in current directory
    /// 3. /etc/keyscope/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.or_else(|| Self::get_config_path_str()) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(url) = overrides.store_url {
            self.store.url = url;
        }
        if let Some(prefix) = overrides.prefix {
            self.drupal.prefix = prefix;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.store.url.trim().is_empty() {
            return Err(ConfigError::Validation("Store URL is empty".to_string()));
        }

        if self.drupal.prefix.is_empty() {
            return Err(ConfigError::Validation(
                "Drupal key prefix cannot be empty".to_string(),
            ));
        }

        let limits = [
            ("drupal.scan_cap", self.drupal.scan_cap),
            ("drupal.scan_count", self.drupal.scan_count),
            ("drupal.top_routes_limit", self.drupal.top_routes_limit),
            ("drupal.search_limit", self.drupal.search_limit),
            ("drupal.search_max_round_trips", self.drupal.search_max_round_trips),
            ("drupal.search_count", self.drupal.search_count),
            ("store.inspect_max_elements", self.store.inspect_max_elements),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::Validation(format!("{} must be > 0", name)));
            }
        }

        let format = self.logging.format.to_ascii_lowercase();
        if format != LOG_FORMAT_TEXT && format != LOG_FORMAT_JSON {
            return Err(ConfigError::Validation(format!(
                "logging.format must be \"{}\" or \"{}\", got {:?}",
                LOG_FORMAT_TEXT, LOG_FORMAT_JSON, self.logging.format
            )));
        }

        if self.sampler.enabled && self.sampler.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "sampler.interval_secs must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        Self::get_config_path_str().map(str::to_string)
    }

    fn get_config_path_str() -> Option<&'static str> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub store_url: Option<String>,
    pub prefix: Option<String>,
    pub log_level: Option<String>,
}
