//! Application configuration, read from YAML.
//!
//! ```yaml
//! actor_buffer: 64
//! store_path: /var/lib/levelup/cart.json
//! tiers:
//!   - { level: 1, name: Rookie, min_points: 0, color: "#777777" }
//!   - { level: 2, name: Pro, min_points: 300, color: "#2266FF", benefits: [Free shipping] }
//! ```
//!
//! Every field is optional. Without `store_path` carts live in memory; without
//! `tiers` the built-in Level-Up table applies.

use crate::model::Tier;
use crate::rewards::{RewardsError, TierTable};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration Errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The configured tier table is invalid
    #[error("Invalid tier table: {0}")]
    Rewards(#[from] RewardsError),

    /// Actor channels need room for at least one request
    #[error("actor_buffer must be at least 1")]
    ZeroActorBuffer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Capacity of each actor's request channel.
    pub actor_buffer: usize,
    /// JSON file backing the cart. `None` keeps lines in memory.
    pub store_path: Option<PathBuf>,
    pub tiers: Option<Vec<Tier>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            actor_buffer: 32,
            store_path: None,
            tiers: None,
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_norway::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings that would otherwise fail at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.actor_buffer == 0 {
            return Err(ConfigError::ZeroActorBuffer);
        }
        self.tier_table()?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// The configured tiers, or the built-in table when none are set.
    pub fn tier_table(&self) -> Result<TierTable, RewardsError> {
        match &self.tiers {
            Some(tiers) => TierTable::new(tiers.clone()),
            None => Ok(TierTable::level_up()),
        }
    }
}
