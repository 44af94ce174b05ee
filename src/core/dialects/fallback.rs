//! Best-effort dialect for model ids without a registered family
//!
//! The request uses Claude style keys since most text models on Bedrock accept
//! them or ignore extras. The response is searched for the usual answer fields
//! and, failing that, returned whole as JSON text.

use super::{DialectError, check_settings, frame_message, text_at};
use crate::core::types::ModelSettings;
use serde_json::{Value, json};

/// Answer fields tried in order; the order is observable, keep it stable
pub const FALLBACK_FIELDS: [&str; 4] = ["/completion", "/generation", "/answer", "/response"];

pub fn build_payload(message: &str, settings: &ModelSettings) -> Result<Value, DialectError> {
    check_settings(settings)?;

    Ok(json!({
        "prompt": frame_message(message),
        "max_tokens_to_sample": settings.max_tokens,
        "temperature": settings.temperature,
    }))
}

pub fn extract_text(response: &Value) -> String {
    FALLBACK_FIELDS
        .iter()
        .find_map(|pointer| text_at(response, pointer))
        .map(str::to_owned)
        .unwrap_or_else(|| response.to_string())
}
