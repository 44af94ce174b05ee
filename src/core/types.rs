//! Request, settings and result types shared by the invokers
//!
//! All of these are per-call values or immutable configuration. Nothing here is
//! shared mutably between requests.

use serde::{Deserialize, Serialize};

/// Model used when configuration does not name one
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-instant-v1";

/// Default completion budget
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Chat request after the HTTP envelope has been parsed and validated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
    pub message: String,
    /// Opaque correlation id, only threaded through for logging and agents
    pub session_id: String,
}

/// Sampling settings for a direct model call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettings {
    /// Bedrock model id, family prefix plus version (e.g. `amazon.titan-text-express-v1`)
    pub model_id: String,
    pub max_tokens: u32,
    /// Expected in `[0, 1]`
    pub temperature: f64,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl ModelSettings {
    pub fn new(model_id: impl Into<String>, max_tokens: u32, temperature: f64) -> Self {
        Self {
            model_id: model_id.into(),
            max_tokens,
            temperature,
        }
    }
}

/// Identifiers of a hosted Bedrock agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSettings {
    pub agent_id: Option<String>,
    pub agent_alias_id: Option<String>,
}

impl AgentSettings {
    pub fn new(agent_id: impl Into<String>, agent_alias_id: impl Into<String>) -> Self {
        Self {
            agent_id: Some(agent_id.into()),
            agent_alias_id: Some(agent_alias_id.into()),
        }
    }
}

/// Marks results that did not come from a real backend answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationStatus {
    /// The invocation path exists but does not call the backend yet
    Pending,
}

/// Normalized answer handed back to the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_status: Option<ImplementationStatus>,
}

impl InvocationResult {
    /// A genuine model answer
    pub fn completed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            implementation_status: None,
        }
    }

    /// A placeholder from a not yet implemented invocation path
    pub fn pending(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            implementation_status: Some(ImplementationStatus::Pending),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.implementation_status == Some(ImplementationStatus::Pending)
    }
}
