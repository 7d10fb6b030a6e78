//! Shared core library for the Nimbus cloud CLI.
//!
//! Provides the typed REST API client, the persisted CLI settings, and the
//! core error taxonomy. This crate does no printing; presentation lives in
//! the CLI crate.

pub mod client;
pub mod config;
pub mod error;

pub use client::ApiClient;
pub use config::Settings;
pub use error::{ApiError, ConfigError, CoreError};
