//! CLI error type
//!
//! Flattens the core crates' errors into one enum so `run` can use `?`
//! everywhere and `main` prints a single line.

use companion_core::{ParseCareActionError, ParseDailyActionError, StoreError};
use impact_core::{ConfigError, ParseFoodError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Food(#[from] ParseFoodError),
    #[error(transparent)]
    CareAction(#[from] ParseCareActionError),
    #[error(transparent)]
    DailyAction(#[from] ParseDailyActionError),
    #[error("could not read profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse profile: {0}")]
    Profile(#[from] toml::de::Error),
}
