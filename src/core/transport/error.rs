//! Transport errors and HTTP status mapping for the Bedrock runtime API

use serde_json::Value;

/// Failure while talking to the backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request signing failed: {0}")]
    Signing(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Request throttled: {0}")]
    Throttled(String),

    #[error("Bedrock API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
}

/// Maps Bedrock HTTP failures onto [`TransportError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BedrockErrorMapper;

impl BedrockErrorMapper {
    pub fn map_http_error(&self, status_code: u16, response_body: &str) -> TransportError {
        let message = Self::error_message(response_body);

        match status_code {
            400 => TransportError::InvalidRequest(message),
            401 | 403 => TransportError::Authentication(message),
            404 => TransportError::ModelNotFound(message),
            429 => TransportError::Throttled(message),
            _ => TransportError::Api {
                status: status_code,
                message,
            },
        }
    }

    pub fn map_network_error(&self, error: &dyn std::error::Error) -> TransportError {
        TransportError::Network(error.to_string())
    }

    /// Bedrock error bodies look like `{"message": "..."}`; anything else is passed through
    fn error_message(response_body: &str) -> String {
        serde_json::from_str::<Value>(response_body)
            .ok()
            .and_then(|body| {
                body.get("message")
                    .or_else(|| body.get("Message"))
                    .and_then(Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| response_body.to_string())
    }
}
