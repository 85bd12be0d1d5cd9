use serde::{Deserialize, Serialize};

use crate::error::PokeApiError;

/// Environment variable naming a TOML file that replaces the built-in configuration.
pub const CONFIG_PATH_ENV: &str = "POKEAPI_CONFIG";

const DEFAULT_CONFIG: &str = include_str!("../config/config.toml");

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub pokemon: PokemonConfig,
    pub display: DisplayConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PokemonConfig {
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub sprite_width: u32,
    pub colored: bool,
}

impl Config {
    pub fn from_toml_str(config_str: &str) -> Result<Self, PokeApiError> {
        toml::from_str(config_str).map_err(|e| {
            tracing::error!("Failed to parse configuration: {}", e);
            PokeApiError::from(e)
        })
    }

    /// Load the file named by `POKEAPI_CONFIG`, or the built-in defaults when unset.
    pub fn load() -> Result<Self, PokeApiError> {
        Self::load_from(std::env::var(CONFIG_PATH_ENV).ok().as_deref())
    }

    pub fn load_from(path: Option<&str>) -> Result<Self, PokeApiError> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                let config_str = std::fs::read_to_string(path).map_err(|e| {
                    tracing::error!("Failed to read configuration file {}: {}", path, e);
                    PokeApiError::Config(format!("cannot read {}: {}", path, e))
                })?;
                Self::from_toml_str(&config_str)
            }
            None => Self::from_toml_str(DEFAULT_CONFIG),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pokemon: PokemonConfig {
                api_url: crate::client::DEFAULT_BASE_URL.to_string(),
                timeout: 30,
            },
            display: DisplayConfig {
                sprite_width: 60,
                colored: true,
            },
        }
    }
}
