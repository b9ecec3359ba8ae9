//! Configuration loading and resolution
//!
//! Each setting resolves in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (merged with 1 by the binary's argument parser)
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "seo-inspector";

/// Compiled defaults
pub mod defaults {
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 5000;
    pub const FETCH_TIMEOUT_SECS: u64 = 30;
    pub const USER_AGENT: &str = "SEO-Inspector-Bot/1.0";
    pub const LOG_LEVEL: &str = "info";
}

/// `[logging]` table of the TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub fetch_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse TOML text
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub fetch_timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
    pub log_level: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub fetch_timeout: Duration,
    pub user_agent: String,
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            fetch_timeout: Duration::from_secs(defaults::FETCH_TIMEOUT_SECS),
            user_agent: defaults::USER_AGENT.to_string(),
            log_level: defaults::LOG_LEVEL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Merge overrides over file values over compiled defaults
    pub fn resolve(overrides: ConfigOverrides, file: Option<TomlConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let host = overrides
            .host
            .or(file.host)
            .unwrap_or_else(|| defaults::HOST.to_string());
        let port = overrides.port.or(file.port).unwrap_or(defaults::PORT);
        let timeout_secs = overrides
            .fetch_timeout_secs
            .or(file.fetch_timeout_secs)
            .unwrap_or(defaults::FETCH_TIMEOUT_SECS);
        let user_agent = overrides
            .user_agent
            .or(file.user_agent)
            .unwrap_or_else(|| defaults::USER_AGENT.to_string());
        let log_level = overrides
            .log_level
            .or(file.logging.level)
            .unwrap_or_else(|| defaults::LOG_LEVEL.to_string());

        if host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }
        if timeout_secs == 0 {
            return Err(Error::Config(
                "fetch_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if user_agent.trim().is_empty() {
            return Err(Error::Config("user_agent must not be empty".to_string()));
        }

        Ok(Self {
            host,
            port,
            fetch_timeout: Duration::from_secs(timeout_secs),
            user_agent,
            log_level,
        })
    }

    /// `host:port` for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Default config file locations, most specific first
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(APP_DIR_NAME).join("config.toml"));
    }
    if cfg!(target_os = "linux") {
        paths.push(PathBuf::from("/etc").join(APP_DIR_NAME).join("config.toml"));
    }
    paths
}

/// Load the TOML config file
///
/// An explicit path must exist. Without one, the default locations are
/// tried and a missing file yields `Ok(None)`.
pub fn load_toml_config(explicit: Option<&Path>) -> Result<Option<TomlConfig>> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match default_config_paths().into_iter().find(|p| p.exists()) {
            Some(path) => path,
            None => {
                info!("No config file found, using defaults");
                return Ok(None);
            }
        },
    };

    debug!(path = %path.display(), "Loading config file");
    let text = std::fs::read_to_string(&path)?;
    let config = TomlConfig::parse(&text)?;
    info!("Loaded config file: {}", path.display());
    Ok(Some(config))
}
