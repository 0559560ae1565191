// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_ENDPOINT, DEFAULT_LISTEN_ADDRESS, DEFAULT_NODE_NAME,
    DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_SECTION_SIZE,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Configuration for a processor node and the command-line client.
///
/// Every section is optional. Missing values fall back to the constants in
/// [`crate::config::consts`].
///
/// # Fields
/// * `node` - Identity and listen address of the local node
/// * `client` - How the command-line client reaches a remote node
/// * `notifications` - Notification log section sizing
///
/// # Example
/// ```yaml
/// node:
///   name: bank-accounts
///   listen_address: "127.0.0.1:50051"
/// client:
///   endpoint: "http://127.0.0.1:50051"
///   connect_timeout_ms: 5000
///   request_timeout_ms: 10000
/// notifications:
///   section_size: 10
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub node: NodeConfig,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Identity of the local node.
#[derive(Debug, Default, Deserialize)]
pub struct NodeConfig {
    pub name: Option<String>,
    pub listen_address: Option<String>,
}

impl NodeConfig {
    /// Get the node name, using the built-in default if not configured.
    pub fn get_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NODE_NAME)
    }

    /// Get the listen address, using the built-in default if not configured.
    pub fn get_listen_address(&self) -> &str {
        self.listen_address
            .as_deref()
            .unwrap_or(DEFAULT_LISTEN_ADDRESS)
    }
}

/// Client-side connection settings.
///
/// # Fields
/// * `endpoint` - URI of the remote node, e.g. `http://10.0.0.1:9000`
/// * `connect_timeout_ms` - Timeout for establishing the channel
/// * `request_timeout_ms` - Timeout applied to each call
#[derive(Debug, Default, Deserialize)]
pub struct ClientConfig {
    pub endpoint: Option<String>,
    pub connect_timeout_ms: Option<u64>,
    pub request_timeout_ms: Option<u64>,
}

impl ClientConfig {
    pub fn get_endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(
            self.connect_timeout_ms
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_MS),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(
            self.request_timeout_ms
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS),
        )
    }
}

/// Notification log settings.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationsConfig {
    pub section_size: Option<u64>,
}

impl NotificationsConfig {
    /// Get the section size, using the built-in default if not configured.
    pub fn get_section_size(&self) -> u64 {
        self.section_size.unwrap_or(DEFAULT_SECTION_SIZE)
    }
}

/// On-disk format of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick the format from the file extension. Anything but `.toml` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse config text in the given format.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config, ConfigError> {
    let cfg = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        ConfigFormat::Toml => toml::from_str(content)?,
    };
    Ok(cfg)
}

/// Load a config from a YAML or TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, ConfigFormat::from_path(path))
}

/// Load and validate a config from a file
///
/// Validation checks that addresses parse and that the section size is
/// within bounds. All problems are reported together.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;

    if let Err(problems) = crate::config::validate_config(&cfg) {
        return Err(ConfigError::Invalid(problems));
    }

    Ok(cfg)
}
