//! # Bedrock Broker
//!
//! A request broker that takes a chat message, adapts it to the request dialect
//! of the AWS Bedrock model family it is configured for, makes one synchronous
//! `InvokeModel` call and normalizes the family specific answer into plain text.
//!
//! ## Features
//!
//! - **Dialect registry**: Claude, AI21, Titan and Cohere payloads and answers,
//!   with a heuristic fallback for unknown model prefixes
//! - **Agent mode**: configuration driven switch to a hosted agent path
//!   (placeholder answers marked `pending`)
//! - **Pluggable transport**: SigV4 signed HTTPS client, replaceable in tests
//! - **HTTP front end**: actix-web `POST /chat` and `GET /health`
//!
//! ## Embedding the router
//!
//! ```rust,no_run
//! use bedrock_broker::{BedrockClient, Config, RequestRouter};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = BedrockClient::new(&config.aws)?;
//!     let router = RequestRouter::new(&config.router, Arc::new(client));
//!
//!     let result = router.route("List 3 Kubernetes pod states", "session-1").await?;
//!     println!("{}", result.message);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::Config;
pub use crate::core::dialects::{DialectEntry, ModelFamily, resolve_dialect};
pub use crate::core::router::{InvocationMode, RequestRouter};
pub use crate::core::transport::{BedrockClient, BedrockTransport, TransportError};
pub use crate::core::types::{
    AgentSettings, ImplementationStatus, InvocationRequest, InvocationResult, ModelSettings,
};
pub use utils::error::{BrokerError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
