//! Bridge configuration, read from `discord-bridge.toml`.
//!
//! ```toml
//! discovery = "first-registered"
//! disabled_bridges = ["DiscordBridge Identity (nop) Implementation"]
//!
//! [command_cache]
//! enabled = false
//! ```

use crate::error::{BridgeError, BridgeResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV: &str = "DISCORD_BRIDGE_CONFIG";

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "discord-bridge.toml";

/// How discovery treats more than one bridge accepting the same object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscoveryMode {
    #[default]
    /// Exactly one bridge must accept; more is an ambiguity error.
    Exact,
    /// The earliest registered accepting bridge wins, with a warning.
    FirstRegistered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CommandCacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub discovery: DiscoveryMode,
    /// Bridge names skipped during discovery.
    #[serde(default)]
    pub disabled_bridges: BTreeSet<String>,
    #[serde(default)]
    pub command_cache: CommandCacheConfig,
}

impl BridgeConfig {
    /// Loads from `$DISCORD_BRIDGE_CONFIG`, else `./discord-bridge.toml`.
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(path)
    }

    /// Loads from an explicit path.
    /// Falls back to defaults with a warning on read or parse errors.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No bridge config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded bridge config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("{} in {:?}. Falling back to defaults.", e, path);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read bridge config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> BridgeResult<Self> {
        toml::from_str(contents).map_err(|e| BridgeError::Config(e.to_string()))
    }

    pub fn is_bridge_enabled(&self, name: &str) -> bool {
        !self.disabled_bridges.contains(name)
    }
}
