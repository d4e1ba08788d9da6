use core::fmt::{Debug, Display};
use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "seating.toml";
pub const ENV_PREFIX: &str = "SEATING_";

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Roster document with the tables and the members to seat.
    pub roster: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
    /// Fixed seed for a reproducible arrangement. Without it every run differs.
    pub seed: Option<u64>,
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] figment::Error),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// `seating.toml`, then `SEATING_*` environment variables, then a roster path given
/// on the command line, later sources overriding earlier ones.
#[must_use]
pub fn config_figment(roster: Option<PathBuf>) -> Figment {
    let figment = Figment::new()
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX));
    match roster {
        Some(roster) => figment.merge(Serialized::default("roster", roster)),
        None => figment,
    }
}

pub fn get_config(roster: Option<PathBuf>) -> Result<Config, ConfigError> {
    Ok(config_figment(roster).extract()?)
}
