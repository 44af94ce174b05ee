//! Chat endpoint

use crate::core::types::{ImplementationStatus, InvocationRequest, InvocationResult};
use crate::server::routes::errors;
use crate::server::state::AppState;
use crate::utils::error::{BrokerError, Result};
use crate::utils::generate_session_id;
use actix_web::{HttpResponse, ResponseError, Result as ActixResult, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Inbound chat body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub session_id: Option<String>,
}

impl ChatRequest {
    /// Check the body and fill in a session id when the caller sent none
    pub fn into_invocation(self) -> Result<InvocationRequest> {
        let message = self
            .message
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| BrokerError::Validation("Message is required".to_string()))?;

        let session_id = self
            .session_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(generate_session_id);

        Ok(InvocationRequest {
            message,
            session_id,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation_status: Option<ImplementationStatus>,
    pub timestamp: DateTime<Utc>,
}

impl ChatResponse {
    pub fn new(result: InvocationResult, session_id: String) -> Self {
        Self {
            message: result.message,
            session_id,
            implementation_status: result.implementation_status,
            timestamp: Utc::now(),
        }
    }
}

/// Accept one chat message and answer through the router
pub async fn chat(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> ActixResult<HttpResponse> {
    let invocation = match request.into_inner().into_invocation() {
        Ok(invocation) => invocation,
        Err(e) => {
            warn!("Invalid chat request: {}", e);
            return Ok(e.error_response());
        }
    };

    info!(session_id = %invocation.session_id, "Chat request received");

    match state
        .router
        .route(&invocation.message, &invocation.session_id)
        .await
    {
        Ok(result) => Ok(HttpResponse::Ok().json(ChatResponse::new(result, invocation.session_id))),
        Err(e) => Ok(errors::internal_error(&e, state.include_error_details)),
    }
}
