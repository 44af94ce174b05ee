//! Core functionality for the broker
//!
//! Dialect adaptation, backend transport, the two invocation paths and the
//! router that selects between them.

pub mod agent;
pub mod dialects;
pub mod invoker;
pub mod router;
pub mod transport;
pub mod types;

pub use agent::{AGENT_PLACEHOLDER_RESPONSE, AgentInvoker};
pub use invoker::ModelInvoker;
pub use router::{InvocationMode, RequestRouter};
