//! Roster Server Library
//!
//! HTTP shell around `roster-core`: routing, request body parsing, JSON
//! response envelopes and configuration.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use crate::config::ServerConfig;
pub use crate::error::{Result, ServerError};
pub use crate::router::create_router;
pub use crate::state::AppState;
