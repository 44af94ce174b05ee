//! Server builder and run_server function

use crate::config::Config;
use crate::core::router::RequestRouter;
use crate::core::transport::{BedrockClient, BedrockTransport};
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{BrokerError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    transport: Option<Arc<dyn BedrockTransport>>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use this transport instead of a [`BedrockClient`] built from the AWS settings
    pub fn with_transport(mut self, transport: Arc<dyn BedrockTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| BrokerError::Config("Configuration is required".to_string()))?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let client = BedrockClient::new(&config.aws).map_err(|e| {
                    BrokerError::Config(format!("Failed to create Bedrock client: {}", e))
                })?;
                info!("Bedrock runtime endpoint: {}", client.endpoint());
                Arc::new(client)
            }
        };

        let router = RequestRouter::new(&config.router, transport);
        let state = AppState::new(router, config.server.include_error_details);

        Ok(HttpServer::new(config.server, state))
    }
}

/// Build the server from `config` and run it until it stops
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting Bedrock broker");

    let server = ServerBuilder::new().with_config(config).build()?;
    let router = &server.state().router;
    info!(
        mode = %router.mode(),
        model_id = %router.model_settings().model_id,
        "Router ready"
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /chat   - Chat message");
    info!("   POST /       - Chat message");

    server.start().await
}
