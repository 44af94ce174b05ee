//! HTTP route modules

pub mod chat;
pub mod health;

use actix_web::web;

/// Register every route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/chat", web::post().to(chat::chat))
        .route("/", web::post().to(chat::chat));
}

/// Error response helpers
pub mod errors {
    use crate::utils::error::{BrokerError, ErrorResponse};
    use actix_web::HttpResponse;

    /// Create an internal server error response, with the error text only when `include_details`
    pub fn internal_error(error: &BrokerError, include_details: bool) -> HttpResponse {
        let body = ErrorResponse::new("Internal server error");
        let body = if include_details {
            body.with_details(error.root().to_string())
        } else {
            body
        };
        HttpResponse::InternalServerError().json(body)
    }

}
