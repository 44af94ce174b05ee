//! Configuration management for the broker
//!
//! Settings come from environment variables (optionally seeded from a `.env`
//! file), are validated once at startup and are immutable afterwards.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::parse_bool;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::Result;
use loader::EnvReader;

/// Fully resolved broker configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub router: RouterConfig,
    pub aws: AwsConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first when present.
    ///
    /// Runs before logging is initialised, so nothing here emits events.
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(crate::utils::error::BrokerError::Config(format!(
                    "Failed to read .env file: {}",
                    e
                )));
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader::new(lookup);

        let config = Self {
            server: ServerConfig::from_reader(&env)?,
            router: RouterConfig::from_reader(&env)?,
            aws: AwsConfig::from_reader(&env),
            logging: LoggingConfig::from_reader(&env)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validation::check("Server", &self.server)?;
        validation::check("Router", &self.router)?;
        validation::check("AWS", &self.aws)?;
        Ok(())
    }
}
