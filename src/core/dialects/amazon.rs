//! Amazon Titan text dialect

use super::{DialectError, ModelFamily, check_settings, frame_message, no_response, text_at};
use crate::core::types::ModelSettings;
use serde_json::{Value, json};

const TOP_P: f64 = 0.9;

/// `inputText` plus a nested `textGenerationConfig`
pub fn build_payload(
    message: &str,
    settings: &ModelSettings,
) -> Result<Value, DialectError> {
    check_settings(settings)?;

    Ok(json!({
        "inputText": frame_message(message),
        "textGenerationConfig": {
            "maxTokenCount": settings.max_tokens,
            "temperature": settings.temperature,
            "topP": TOP_P,
        }
    }))
}

/// Reads `results[0].outputText`
pub fn extract_text(response: &Value) -> String {
    text_at(response, "/results/0/outputText")
        .map(str::to_owned)
        .unwrap_or_else(|| no_response(ModelFamily::Titan))
}
