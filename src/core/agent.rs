//! Hosted agent invocation
//!
//! Agent sessions are not wired to the runtime yet. The path validates its
//! identifiers and answers with a placeholder marked
//! [`ImplementationStatus::Pending`](crate::core::types::ImplementationStatus)
//! so callers can tell it apart from a real answer.

use tracing::{info, warn};

use crate::core::types::{AgentSettings, InvocationResult};
use crate::utils::error::{BrokerError, Result};
use crate::utils::logging::{LOG_PREVIEW_CHARS, truncate_for_log};

/// Text returned for every agent invocation until agent sessions are wired up
pub const AGENT_PLACEHOLDER_RESPONSE: &str = "This is a placeholder response...";

/// Invokes a hosted Bedrock agent
#[derive(Debug, Clone)]
pub struct AgentInvoker {
    settings: AgentSettings,
}

impl AgentInvoker {
    pub fn new(settings: AgentSettings) -> Self {
        Self { settings }
    }

    /// Validate the agent identifiers and return the pending placeholder.
    ///
    /// Missing or blank identifiers fail with [`BrokerError::AgentConfig`]
    /// before anything else happens.
    pub async fn invoke_agent(&self, message: &str, session_id: &str) -> Result<InvocationResult> {
        let (agent_id, agent_alias_id) = self.identifiers()?;

        info!(
            agent_id,
            agent_alias_id,
            session_id,
            "Invoking agent with message: {}",
            truncate_for_log(message, LOG_PREVIEW_CHARS)
        );
        warn!(agent_id, "Agent invocation is not implemented, returning placeholder");

        Ok(InvocationResult::pending(AGENT_PLACEHOLDER_RESPONSE))
    }

    fn identifiers(&self) -> Result<(&str, &str)> {
        let agent_id = non_blank(&self.settings.agent_id);
        let agent_alias_id = non_blank(&self.settings.agent_alias_id);

        match (agent_id, agent_alias_id) {
            (Some(id), Some(alias)) => Ok((id, alias)),
            (None, Some(_)) => Err(BrokerError::AgentConfig(
                "agent ID is not set".to_string(),
            )),
            (Some(_), None) => Err(BrokerError::AgentConfig(
                "agent alias ID is not set".to_string(),
            )),
            (None, None) => Err(BrokerError::AgentConfig(
                "agent ID and agent alias ID are not set".to_string(),
            )),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
