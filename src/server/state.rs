//! Application state shared across HTTP handlers

use crate::core::router::{InvocationMode, RequestRouter};
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Read-only after startup; cloned into every actix worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Request router
    pub router: Arc<RequestRouter>,
    /// Put the underlying error text into 500 responses
    pub include_error_details: bool,
}

impl AppState {
    pub fn new(router: RequestRouter, include_error_details: bool) -> Self {
        Self {
            router: Arc::new(router),
            include_error_details,
        }
    }

    pub fn mode(&self) -> InvocationMode {
        self.router.mode()
    }
}
