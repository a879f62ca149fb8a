//! msgroute.toml configuration parser.
//!
//! Every section is optional. An empty file yields the built-in tier table,
//! a 5000-recipient ceiling, a 10-digit recipient pattern and port 8080.

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::RouteError;
use crate::tier::{Tier, TierSchedule, default_tiers};

pub const DEFAULT_MAX_RECIPIENTS: usize = 5000;
pub const DEFAULT_RECIPIENT_PATTERN: &str = "[0-9]{10}";
pub const DEFAULT_LISTEN_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("{0}")]
    Schedule(#[from] RouteError),

    #[error("invalid recipient pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default = "default_tiers")]
    pub tiers: Vec<Tier>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: SocketAddr,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_recipients")]
    pub max_recipients: usize,
    /// Matched against the whole recipient value.
    #[serde(default = "default_recipient_pattern")]
    pub recipient_pattern: String,
}

fn default_listen() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], DEFAULT_LISTEN_PORT))
}

fn default_max_recipients() -> usize {
    DEFAULT_MAX_RECIPIENTS
}

fn default_recipient_pattern() -> String {
    DEFAULT_RECIPIENT_PATTERN.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_recipients: DEFAULT_MAX_RECIPIENTS,
            recipient_pattern: default_recipient_pattern(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            limits: LimitsConfig::default(),
            tiers: default_tiers(),
        }
    }
}

impl RouteConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate the configured tiers into a schedule.
    pub fn schedule(&self) -> Result<TierSchedule, ConfigError> {
        Ok(TierSchedule::new(self.tiers.clone())?)
    }
}
