//! HTTP server core implementation

use crate::config::ServerConfig;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{BrokerError, Result};
use actix_cors::Cors;
use actix_web::http::{Method, header};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use tracing::{info, warn};

/// Value of the `Server` response header
pub const SERVER_HEADER: &str = "bedrock-broker";

/// Seconds browsers may cache a CORS preflight
const CORS_MAX_AGE: usize = 3600;

/// HTTP server
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Start the HTTP server and run until it stops
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || create_app(state.clone()))
            .bind(&bind_addr)
            .map_err(|e| BrokerError::Server(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| BrokerError::Server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Create the actix-web application
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let cors = Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(CORS_MAX_AGE);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        warn!("Rejected request body: {}", err);
        BrokerError::Validation(format!("Invalid request body: {}", err)).into()
    });

    App::new()
        .app_data(state)
        .app_data(json_config)
        .wrap(cors)
        .wrap(Logger::default())
        .wrap(DefaultHeaders::new().add(("Server", SERVER_HEADER)))
        .configure(routes::configure_routes)
}
