//! Environment variable loading
//!
//! Every value is read through a lookup function so the same code serves the
//! process environment and the fixed maps used in tests.

use super::models::*;
use crate::core::types::{AgentSettings, ModelSettings};
use crate::utils::error::{BrokerError, Result};
use crate::utils::logging::LogLevel;
use std::str::FromStr;

pub const USE_AGENT: &str = "USE_AGENT";
pub const BEDROCK_MODEL_ID: &str = "BEDROCK_MODEL_ID";
pub const MODEL_ID: &str = "MODEL_ID";
pub const MAX_TOKENS: &str = "MAX_TOKENS";
pub const TEMPERATURE: &str = "TEMPERATURE";
pub const BEDROCK_AGENT_ID: &str = "BEDROCK_AGENT_ID";
pub const BEDROCK_AGENT_ALIAS_ID: &str = "BEDROCK_AGENT_ALIAS_ID";
pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const LOG_FORMAT: &str = "LOG_FORMAT";
pub const INCLUDE_ERROR_DETAILS: &str = "INCLUDE_ERROR_DETAILS";
pub const HOST: &str = "HOST";
pub const PORT: &str = "PORT";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const BEDROCK_ENDPOINT: &str = "BEDROCK_ENDPOINT";

/// Typed reads over a variable lookup
pub(crate) struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub(crate) fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// Trimmed value; blank counts as unset
    pub(crate) fn string(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    pub(crate) fn parse<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.string(key)
            .map(|value| {
                value
                    .parse::<T>()
                    .map_err(|e| BrokerError::Config(format!("Invalid {} '{}': {}", key, value, e)))
            })
            .transpose()
    }

    pub(crate) fn flag(&self, key: &str) -> Result<Option<bool>> {
        self.string(key)
            .map(|value| {
                parse_bool(&value).ok_or_else(|| {
                    BrokerError::Config(format!("Invalid {} '{}': expected a boolean", key, value))
                })
            })
            .transpose()
    }
}

/// `true/false`, `1/0` and `yes/no`, case-insensitive
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl ServerConfig {
    pub(crate) fn from_reader<F>(env: &EnvReader<F>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: env.string(HOST).unwrap_or(defaults.host),
            port: env.parse(PORT)?.unwrap_or(defaults.port),
            include_error_details: env
                .flag(INCLUDE_ERROR_DETAILS)?
                .unwrap_or(defaults.include_error_details),
        })
    }
}

impl RouterConfig {
    pub(crate) fn from_reader<F>(env: &EnvReader<F>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ModelSettings::default();
        let model = ModelSettings {
            model_id: env
                .string(BEDROCK_MODEL_ID)
                .or_else(|| env.string(MODEL_ID))
                .unwrap_or(defaults.model_id),
            max_tokens: env.parse(MAX_TOKENS)?.unwrap_or(defaults.max_tokens),
            temperature: env.parse(TEMPERATURE)?.unwrap_or(defaults.temperature),
        };

        let agent = AgentSettings {
            agent_id: env.string(BEDROCK_AGENT_ID),
            agent_alias_id: env.string(BEDROCK_AGENT_ALIAS_ID),
        };

        Ok(Self {
            use_agent: env.flag(USE_AGENT)?.unwrap_or(false),
            model,
            agent,
        })
    }
}

impl AwsConfig {
    pub(crate) fn from_reader<F>(env: &EnvReader<F>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            region: env
                .string(AWS_REGION)
                .or_else(|| env.string(AWS_DEFAULT_REGION))
                .unwrap_or_else(default_region),
            access_key_id: env.string(AWS_ACCESS_KEY_ID),
            secret_access_key: env.string(AWS_SECRET_ACCESS_KEY),
            session_token: env.string(AWS_SESSION_TOKEN),
            endpoint: env.string(BEDROCK_ENDPOINT),
        }
    }
}

impl LoggingConfig {
    pub(crate) fn from_reader<F>(env: &EnvReader<F>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = env.parse::<LogLevel>(LOG_LEVEL)?.unwrap_or_default();
        let json = match env.string(LOG_FORMAT) {
            None => false,
            Some(format) => match format.to_lowercase().as_str() {
                "json" => true,
                "text" | "pretty" | "compact" => false,
                other => {
                    return Err(BrokerError::Config(format!(
                        "Invalid {} '{}': expected json or text",
                        LOG_FORMAT, other
                    )));
                }
            },
        };

        Ok(Self { level, json })
    }
}
