//! Configuration loading for the impact calculator.
//!
//! All tables, weights, and the tier ladder can be overridden from a
//! TOML file; anything left out keeps its production default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::score::ScoreWeights;
use crate::tables::{EconomicTables, EnvironmentalTables};
use crate::tiers::TierLadder;

/// Complete calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConfig {
    /// Environmental impact tables
    pub environmental: EnvironmentalTables,
    /// Economic impact tables
    pub economic: EconomicTables,
    /// Score composition weights
    pub weights: ScoreWeights,
    /// Tier ladder
    pub tiers: TierLadder,
}

impl ImpactConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string. The tier ladder is
    /// validated during deserialization, so an invalid ladder fails
    /// the parse.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Serializes the configuration back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
