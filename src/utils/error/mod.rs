//! Error handling utilities
//!
//! This module provides the broker error type and the JSON error body.

pub mod error;

pub use error::*;
