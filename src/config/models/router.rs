//! Router configuration

use crate::core::types::{AgentSettings, ModelSettings};
use serde::{Deserialize, Serialize};

/// Selects the invocation path and carries the settings for both
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterConfig {
    /// Route to the agent stub instead of a direct model call
    #[serde(default)]
    pub use_agent: bool,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub agent: AgentSettings,
}
