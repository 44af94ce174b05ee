//! Health check endpoint

use crate::core::router::InvocationMode;
use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub version: Cow<'static, str>,
    pub mode: InvocationMode,
}

/// Basic health check endpoint
///
/// Does not call the backend; it only reports that the process is serving.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    Ok(HttpResponse::Ok().json(HealthStatus {
        status: Cow::Borrowed("healthy"),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        mode: state.mode(),
    }))
}
