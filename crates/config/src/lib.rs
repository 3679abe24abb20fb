//! Configuration management for the actinia client.
//!
//! This crate provides the types and loader for the client configuration
//! surface: API host, source/version tags, response language and user
//! credentials. The configuration is a plain value handed to the client
//! builder; nothing in here is global state.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{AuthConfig, BasicAuth, Config, ConnectionConfig};
