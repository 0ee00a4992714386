use serde::{Deserialize, Serialize};
use std::path::Path;

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::{DomainError, ServerAddr};

const LOCAL_CONFIG_PATH: &str = "dns-parity.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dns-parity/config.toml";

/// Main configuration structure for dns-parity
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Servers under comparison and exchange limits
    #[serde(default)]
    pub dns: DnsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-parity.toml in current directory
    /// 3. /etc/dns-parity/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top of whichever source won.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.servers.is_empty() {
            self.dns.servers = overrides.servers;
        }
        if let Some(timeout) = overrides.query_timeout {
            self.dns.query_timeout = timeout;
        }
        if let Some(max) = overrides.max_parallel_exchanges {
            self.dns.max_parallel_exchanges = max;
        }
        if overrides.sequential {
            self.dns.max_parallel_exchanges = 1;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.servers.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "you must provide at least 2 servers ({} configured)",
                self.dns.servers.len()
            )));
        }

        self.server_addrs()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "query_timeout must be greater than 0".to_string(),
            ));
        }

        if self.dns.max_parallel_exchanges == 0 {
            return Err(ConfigError::Validation(
                "max_parallel_exchanges must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Parse the configured servers, defaulting the port to 53
    pub fn server_addrs(&self) -> Result<Vec<ServerAddr>, DomainError> {
        self.dns.servers.iter().map(|s| s.parse()).collect()
    }

    /// Get the path to the configuration file that would be picked up
    pub fn get_config_path() -> Option<String> {
        if Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub servers: Vec<String>,
    pub query_timeout: Option<u64>,
    pub max_parallel_exchanges: Option<usize>,
    pub sequential: bool,
    pub log_level: Option<String>,
}
