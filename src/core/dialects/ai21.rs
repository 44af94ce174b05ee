//! AI21 Labs Jurassic dialect

use super::{DialectError, ModelFamily, check_settings, frame_message, no_response, text_at};
use crate::core::types::ModelSettings;
use serde_json::{Value, json};

const TOP_P: f64 = 0.9;

/// Plain prompt with camelCase sampling parameters
pub fn build_payload(message: &str, settings: &ModelSettings) -> Result<Value, DialectError> {
    check_settings(settings)?;

    Ok(json!({
        "prompt": frame_message(message),
        "maxTokens": settings.max_tokens,
        "temperature": settings.temperature,
        "topP": TOP_P,
    }))
}

/// Reads `completions[0].data.text`
pub fn extract_text(response: &Value) -> String {
    text_at(response, "/completions/0/data/text")
        .map(str::to_owned)
        .unwrap_or_else(|| no_response(ModelFamily::AI21))
}
