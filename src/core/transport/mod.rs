//! Backend transport
//!
//! The invoker only needs `invoke(payload) -> raw bytes`. [`BedrockTransport`] is that
//! seam; [`BedrockClient`] implements it over HTTPS with SigV4 signing and tests
//! substitute their own implementations.

mod client;
mod error;
mod sigv4;

pub use client::BedrockClient;
pub use error::{BedrockErrorMapper, TransportError};
pub use sigv4::SigV4Signer;

use async_trait::async_trait;
use bytes::Bytes;

/// Media type used for both request and response bodies
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One `InvokeModel` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeModelRequest {
    pub model_id: String,
    pub content_type: String,
    pub accept: String,
    pub body: Bytes,
}

impl InvokeModelRequest {
    /// JSON in, JSON out
    pub fn json(model_id: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            model_id: model_id.into(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            accept: JSON_CONTENT_TYPE.to_string(),
            body: body.into(),
        }
    }
}

/// Raw response body, undecoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeModelResponse {
    pub body: Bytes,
}

impl InvokeModelResponse {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { body: body.into() }
    }
}

/// Synchronous request/response access to a model serving backend
#[async_trait]
pub trait BedrockTransport: Send + Sync {
    /// Perform exactly one backend call
    async fn invoke_model(
        &self,
        request: InvokeModelRequest,
    ) -> Result<InvokeModelResponse, TransportError>;
}
