//! Utility modules for the broker
//!
//! - **error**: broker error type and JSON error bodies
//! - **logging**: log levels, subscriber setup and log previews

pub mod error;
pub mod logging;

pub use error::{BrokerError, ErrorResponse, Result};
pub use logging::{LOG_PREVIEW_CHARS, LogLevel, init_logging, truncate_for_log};

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Characters per session id segment
const SESSION_SEGMENT_LEN: usize = 8;

/// Generate a session id for callers that did not send one.
///
/// Two lowercase alphanumeric segments joined by `-`, e.g. `k3x9a0qz-7m2p4d1c`.
pub fn generate_session_id() -> String {
    format!(
        "{}-{}",
        random_segment(SESSION_SEGMENT_LEN),
        random_segment(SESSION_SEGMENT_LEN)
    )
}

fn random_segment(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}
