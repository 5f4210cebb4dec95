//! Shared configuration library for Vantage.
//!
//! This crate centralizes environment-variable loading and validation for
//! the sync layer and the reverse proxy so there is a single source of
//! truth for config defaults and guard rails.

pub mod constants;
pub mod loader;
pub mod models;

pub use loader::{ConfigLoader, error::ConfigLoadError};
pub use models::{BackendConfig, Config, PollConfig, ProxyConfig};
