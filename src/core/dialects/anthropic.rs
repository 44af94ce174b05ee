//! Anthropic Claude text completion dialect

use super::{DialectError, ModelFamily, check_settings, frame_message, no_response, text_at};
use crate::core::types::ModelSettings;
use serde_json::{Value, json};

/// Stop sequence that ends the assistant turn
pub const HUMAN_STOP_SEQUENCE: &str = "\n\nHuman:";

const TOP_K: u32 = 250;
const TOP_P: f64 = 0.999;

/// Single Human/Assistant turn prompt with Claude sampling parameters
pub fn build_payload(message: &str, settings: &ModelSettings) -> Result<Value, DialectError> {
    check_settings(settings)?;

    Ok(json!({
        "prompt": format!("\n\nHuman: {}\n\nAssistant:", frame_message(message)),
        "max_tokens_to_sample": settings.max_tokens,
        "temperature": settings.temperature,
        "top_k": TOP_K,
        "top_p": TOP_P,
        "stop_sequences": [HUMAN_STOP_SEQUENCE],
    }))
}

pub fn extract_text(response: &Value) -> String {
    text_at(response, "/completion")
        .map(str::to_owned)
        .unwrap_or_else(|| no_response(ModelFamily::Claude))
}
