//! Direct model invocation
//!
//! Resolve the dialect, build the body, make the single backend call, decode
//! and extract. Every failure along the way leaves this module as one
//! [`BrokerError::ModelInvocation`].

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::core::dialects::{DialectError, resolve_dialect};
use crate::core::transport::{BedrockTransport, InvokeModelRequest, TransportError};
use crate::core::types::{InvocationResult, ModelSettings};
use crate::utils::error::{BrokerError, Result};
use crate::utils::logging::{LOG_PREVIEW_CHARS, truncate_for_log};

/// Failures before the invoker boundary collapses them
#[derive(Debug, thiserror::Error)]
enum InvocationFailure {
    #[error(transparent)]
    Dialect(#[from] DialectError),

    #[error("Failed to serialize payload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Invokes Bedrock models through an injected transport
#[derive(Clone)]
pub struct ModelInvoker {
    transport: Arc<dyn BedrockTransport>,
}

impl ModelInvoker {
    pub fn new(transport: Arc<dyn BedrockTransport>) -> Self {
        Self { transport }
    }

    /// Send `message` to the model named in `settings` and return its answer
    pub async fn invoke_model(
        &self,
        message: &str,
        settings: &ModelSettings,
    ) -> Result<InvocationResult> {
        info!(
            model_id = %settings.model_id,
            "Invoking model with message: {}",
            truncate_for_log(message, LOG_PREVIEW_CHARS)
        );

        match self.try_invoke(message, settings).await {
            Ok(text) => {
                info!(
                    model_id = %settings.model_id,
                    response_length = text.chars().count(),
                    "Model invocation completed"
                );
                Ok(InvocationResult::completed(text))
            }
            Err(e) => {
                error!(model_id = %settings.model_id, error = ?e, "Model invocation failed: {}", e);
                Err(BrokerError::ModelInvocation(e.to_string()))
            }
        }
    }

    async fn try_invoke(
        &self,
        message: &str,
        settings: &ModelSettings,
    ) -> std::result::Result<String, InvocationFailure> {
        let dialect = resolve_dialect(&settings.model_id);
        let payload = dialect.build_payload(message, settings)?;
        let body = serde_json::to_vec(&payload).map_err(InvocationFailure::Serialize)?;
        debug!("Request payload: {}", payload);

        let response = self
            .transport
            .invoke_model(InvokeModelRequest::json(settings.model_id.as_str(), body))
            .await?;

        let text = std::str::from_utf8(&response.body)
            .map_err(|e| InvocationFailure::Decode(format!("response is not UTF-8: {}", e)))?;
        debug!("Raw response: {}", text);

        let parsed: Value = serde_json::from_str(text)
            .map_err(|e| InvocationFailure::Decode(format!("response is not JSON: {}", e)))?;

        Ok(dialect.extract_text(&parsed))
    }
}

impl std::fmt::Debug for ModelInvoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelInvoker").finish_non_exhaustive()
    }
}
