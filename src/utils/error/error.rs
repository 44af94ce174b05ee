//! Error handling for the broker
//!
//! This module defines the error type shared by the invokers, the router and the HTTP layer.

use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Result type alias for the broker
pub type Result<T> = std::result::Result<T, BrokerError>;

/// Main error type for the broker
#[derive(Error, Debug)]
pub enum BrokerError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Inbound request is malformed or missing required fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payload build, backend call or response decoding failed
    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    /// Agent mode selected without agent identifiers
    #[error("Agent configuration incomplete: {0}")]
    AgentConfig(String),

    /// Anything escaping the request router
    #[error("Request processing failed: {0}")]
    Unhandled(#[source] Box<BrokerError>),

    /// HTTP server could not bind or stopped with an error
    #[error("Server error: {0}")]
    Server(String),
}

impl BrokerError {
    /// Wrap a downstream failure as it leaves the router
    pub fn unhandled(inner: BrokerError) -> Self {
        BrokerError::Unhandled(Box::new(inner))
    }

    /// The innermost error, unwrapping any router wrapping
    pub fn root(&self) -> &BrokerError {
        match self {
            BrokerError::Unhandled(inner) => inner.root(),
            other => other,
        }
    }

    /// Short machine readable code for log fields
    pub fn code(&self) -> &'static str {
        match self {
            BrokerError::Config(_) => "CONFIG_ERROR",
            BrokerError::Validation(_) => "VALIDATION_ERROR",
            BrokerError::ModelInvocation(_) => "MODEL_INVOCATION_ERROR",
            BrokerError::AgentConfig(_) => "AGENT_CONFIG_ERROR",
            BrokerError::Unhandled(_) => "INTERNAL_ERROR",
            BrokerError::Server(_) => "SERVER_ERROR",
        }
    }
}

impl ResponseError for BrokerError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match self {
            BrokerError::Validation(_) => actix_web::http::StatusCode::BAD_REQUEST,
            _ => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Only validation messages are safe to echo without the details flag.
        let body = match self {
            BrokerError::Validation(message) => ErrorResponse::new(message.clone()),
            _ => ErrorResponse::new("Internal server error"),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Standard error response body
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
