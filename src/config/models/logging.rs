//! Logging configuration

use crate::utils::logging::LogLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
    /// Emit JSON lines instead of the human format
    #[serde(default)]
    pub json: bool,
}
