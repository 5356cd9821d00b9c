use std::{env, path::PathBuf};

use leptos::logging::{log, warn};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),
}

/// Server settings read from the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    /// Overrides the port of the Leptos site address when set.
    pub port: Option<u16>,
    pub products_seed: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_ok() {
            log!("[CONFIG] Loaded variables from .env");
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let port: Option<u16> = match lookup("PORT") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            ),
            None => {
                log!("[CONFIG] PORT not set, using the Leptos site address");
                None
            }
        };

        let products_seed = lookup("PRODUCTS_SEED").map(PathBuf::from);
        if products_seed.is_none() {
            warn!("[CONFIG] PRODUCTS_SEED not set, products must be provisioned separately");
        }

        Ok(Config {
            database_url,
            port,
            products_seed,
        })
    }
}
