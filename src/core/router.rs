//! Request routing
//!
//! Picks the agent or direct model path from configuration and is the last
//! place a failure can be logged before the HTTP layer turns it into a 500.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::RouterConfig;
use crate::core::agent::AgentInvoker;
use crate::core::invoker::ModelInvoker;
use crate::core::transport::BedrockTransport;
use crate::core::types::{InvocationResult, ModelSettings};
use crate::utils::error::{BrokerError, Result};

/// Which invocation path the router uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationMode {
    Model,
    Agent,
}

impl InvocationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvocationMode::Model => "model",
            InvocationMode::Agent => "agent",
        }
    }
}

impl std::fmt::Display for InvocationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dispatches chat messages to the configured invocation path
#[derive(Debug, Clone)]
pub struct RequestRouter {
    mode: InvocationMode,
    model_settings: ModelSettings,
    model_invoker: ModelInvoker,
    agent_invoker: AgentInvoker,
}

impl RequestRouter {
    pub fn new(config: &RouterConfig, transport: Arc<dyn BedrockTransport>) -> Self {
        let mode = if config.use_agent {
            InvocationMode::Agent
        } else {
            InvocationMode::Model
        };

        Self {
            mode,
            model_settings: config.model.clone(),
            model_invoker: ModelInvoker::new(transport),
            agent_invoker: AgentInvoker::new(config.agent.clone()),
        }
    }

    pub fn mode(&self) -> InvocationMode {
        self.mode
    }

    pub fn model_settings(&self) -> &ModelSettings {
        &self.model_settings
    }

    /// Route one message. Failures come back wrapped as [`BrokerError::Unhandled`].
    pub async fn route(&self, message: &str, session_id: &str) -> Result<InvocationResult> {
        debug!(mode = %self.mode, session_id, "Routing request");

        let outcome = match self.mode {
            InvocationMode::Agent => self.agent_invoker.invoke_agent(message, session_id).await,
            InvocationMode::Model => {
                self.model_invoker
                    .invoke_model(message, &self.model_settings)
                    .await
            }
        };

        outcome.map_err(|e| {
            error!(
                mode = %self.mode,
                session_id,
                code = %e.code(),
                "Error processing request: {}",
                e
            );
            BrokerError::unhandled(e)
        })
    }
}
