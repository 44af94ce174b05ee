//! Configuration validation

use super::models::*;
use crate::utils::error::{BrokerError, Result};

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> std::result::Result<(), String>;
}

impl Validate for ServerConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        Ok(())
    }
}

impl Validate for RouterConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let model = &self.model;

        if model.model_id.trim().is_empty() {
            return Err("Model ID cannot be empty".to_string());
        }

        if model.max_tokens == 0 {
            return Err("Max tokens must be greater than 0".to_string());
        }

        if !(0.0..=1.0).contains(&model.temperature) {
            return Err(format!(
                "Temperature must be between 0 and 1, got {}",
                model.temperature
            ));
        }

        Ok(())
    }
}

impl Validate for AwsConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.region.trim().is_empty() {
            return Err("AWS region cannot be empty".to_string());
        }

        if let Some(endpoint) = &self.endpoint {
            let url = url::Url::parse(endpoint)
                .map_err(|e| format!("Bedrock endpoint has invalid URL format: {}", e))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(format!(
                    "Bedrock endpoint must use http:// or https:// scheme, got: {}",
                    url.scheme()
                ));
            }
        }

        Ok(())
    }
}

/// Run a validator and tag its message with the section it came from
pub(crate) fn check<V: Validate>(section: &str, value: &V) -> Result<()> {
    value
        .validate()
        .map_err(|e| BrokerError::Config(format!("{} config error: {}", section, e)))
}
