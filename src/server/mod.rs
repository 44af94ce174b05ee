//! HTTP server implementation
//!
//! actix-web front end for the request router: chat and health routes, CORS
//! and request logging.

pub mod builder;
pub mod routes;
pub mod server;
pub mod state;

pub use builder::{ServerBuilder, run_server};
pub use server::{HttpServer, create_app};
pub use state::AppState;
