//! Configuration data models

pub mod aws;
pub mod logging;
pub mod router;
pub mod server;

pub use aws::*;
pub use logging::*;
pub use router::*;
pub use server::*;

/// Default bind address
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default AWS region
pub fn default_region() -> String {
    "us-east-1".to_string()
}
