//! Cohere Command dialect (prompt format)

use super::{DialectError, ModelFamily, check_settings, frame_message, no_response, text_at};
use crate::core::types::ModelSettings;
use serde_json::{Value, json};

const TOP_P: f64 = 0.9;

pub fn build_payload(message: &str, settings: &ModelSettings) -> Result<Value, DialectError> {
    check_settings(settings)?;

    Ok(json!({
        "prompt": frame_message(message),
        "max_tokens": settings.max_tokens,
        "temperature": settings.temperature,
        "p": TOP_P,
    }))
}

/// Reads `generations[0].text`
pub fn extract_text(response: &Value) -> String {
    text_at(response, "/generations/0/text")
        .map(str::to_owned)
        .unwrap_or_else(|| no_response(ModelFamily::Cohere))
}
