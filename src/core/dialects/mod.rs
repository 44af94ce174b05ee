//! Model dialect registry
//!
//! Each Bedrock model family expects its own request body and answers with its own
//! response envelope. The registry maps a model id to the pair of functions that
//! shape one and read the other.
//!
//! Matching is a prefix test over an ordered table, first match wins. Model ids
//! that match nothing fall back to [`DEFAULT_DIALECT`], which sends a Claude style
//! body and reads the response leniently. Adding a family means adding a table row.

pub mod ai21;
pub mod amazon;
pub mod anthropic;
pub mod cohere;
pub mod fallback;

use crate::core::types::ModelSettings;
use serde_json::Value;
use tracing::{debug, warn};

/// Framing wrapped around every user message
pub const SYSTEM_FRAMING: &str =
    "You are a helpful DevOps assistant. Please respond to this question: ";

/// Shapes the request body for one family
pub type PayloadBuilder = fn(&str, &ModelSettings) -> Result<Value, DialectError>;

/// Reads the answer text out of one family's response. Never fails.
pub type TextExtractor = fn(&Value) -> String;

/// Errors raised while shaping a request body
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DialectError {
    #[error("Invalid settings for {model_id}: {message}")]
    InvalidSettings { model_id: String, message: String },
}

/// Bedrock model families with a dedicated dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    Claude,
    AI21,
    Titan,
    Cohere,
    /// Anything without a registered prefix
    Unknown,
}

impl ModelFamily {
    /// Name used in placeholder answers and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelFamily::Claude => "Claude",
            ModelFamily::AI21 => "AI21",
            ModelFamily::Titan => "Titan",
            ModelFamily::Cohere => "Cohere",
            ModelFamily::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One row of the registry
#[derive(Debug)]
pub struct DialectEntry {
    pub family: ModelFamily,
    /// `None` only for the default entry
    pub prefix: Option<&'static str>,
    builder: PayloadBuilder,
    extractor: TextExtractor,
}

impl DialectEntry {
    pub const fn new(
        family: ModelFamily,
        prefix: Option<&'static str>,
        builder: PayloadBuilder,
        extractor: TextExtractor,
    ) -> Self {
        Self {
            family,
            prefix,
            builder,
            extractor,
        }
    }

    pub fn matches(&self, model_id: &str) -> bool {
        self.prefix
            .is_some_and(|prefix| model_id.starts_with(prefix))
    }

    pub fn is_default(&self) -> bool {
        self.prefix.is_none()
    }

    /// Build the family specific request body for `message`
    pub fn build_payload(
        &self,
        message: &str,
        settings: &ModelSettings,
    ) -> Result<Value, DialectError> {
        (self.builder)(message, settings)
    }

    /// Pull the answer text out of a parsed response
    pub fn extract_text(&self, response: &Value) -> String {
        (self.extractor)(response)
    }
}

/// Known families in match priority order
static DIALECTS: [DialectEntry; 4] = [
    DialectEntry::new(
        ModelFamily::Claude,
        Some("anthropic.claude"),
        anthropic::build_payload,
        anthropic::extract_text,
    ),
    DialectEntry::new(
        ModelFamily::AI21,
        Some("ai21"),
        ai21::build_payload,
        ai21::extract_text,
    ),
    DialectEntry::new(
        ModelFamily::Titan,
        Some("amazon.titan"),
        amazon::build_payload,
        amazon::extract_text,
    ),
    DialectEntry::new(
        ModelFamily::Cohere,
        Some("cohere"),
        cohere::build_payload,
        cohere::extract_text,
    ),
];

/// Best-effort dialect for unrecognised model ids
pub static DEFAULT_DIALECT: DialectEntry = DialectEntry::new(
    ModelFamily::Unknown,
    None,
    fallback::build_payload,
    fallback::extract_text,
);

/// Find the dialect for `model_id`.
///
/// An unknown family is not an error: the default entry is returned and a
/// warning is logged.
pub fn resolve_dialect(model_id: &str) -> &'static DialectEntry {
    match DIALECTS.iter().find(|entry| entry.matches(model_id)) {
        Some(entry) => {
            debug!("Resolved model {} to {} dialect", model_id, entry.family);
            entry
        }
        None => {
            warn!(
                "Unknown model family for {}, using default dialect",
                model_id
            );
            &DEFAULT_DIALECT
        }
    }
}

/// Registered families in match order, without the default entry
pub fn registered_dialects() -> &'static [DialectEntry] {
    &DIALECTS
}

/// Wrap a user message in the fixed system framing
pub fn frame_message(message: &str) -> String {
    format!("{}{}", SYSTEM_FRAMING, message)
}

/// Placeholder returned when a response lacks the expected field
pub fn no_response(family: ModelFamily) -> String {
    format!("No response from {} model", family.display_name())
}

/// Non-empty string at a JSON pointer
pub(crate) fn text_at<'a>(response: &'a Value, pointer: &str) -> Option<&'a str> {
    response
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

/// Reject settings no backend accepts
pub(crate) fn check_settings(settings: &ModelSettings) -> Result<(), DialectError> {
    let invalid = |message: String| DialectError::InvalidSettings {
        model_id: settings.model_id.clone(),
        message,
    };

    if settings.max_tokens == 0 {
        return Err(invalid("max tokens must be greater than 0".to_string()));
    }
    if !settings.temperature.is_finite() || !(0.0..=1.0).contains(&settings.temperature) {
        return Err(invalid(format!(
            "temperature must be within [0, 1], got {}",
            settings.temperature
        )));
    }
    Ok(())
}
