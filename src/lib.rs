//! # codechef-client
//!
//! Async client for the CodeChef REST API.
//!
//! The client exchanges OAuth client credentials for an access token, then
//! sends every request with that bearer token and hands the decoded JSON back
//! unchanged. Failures keep their class: transport faults, non-success HTTP
//! statuses and undecodable bodies are distinct [`error::AppError`] variants,
//! and any of them folds into the `{"success": false, "error": ...}` record.
//!
//! ```ignore
//! use codechef_client::prelude::*;
//!
//! let client = Client::new(Config::with_credentials("id", "secret")).await?;
//! let contest = client.get_contest("COOK82", &["name", "problemsList"], None).await?;
//! ```

/// Resource traits and their implementations
pub mod application;
/// Token management
pub mod auth;
/// Request dispatcher
pub mod client;
/// Configuration
pub mod config;
/// Library constants
pub mod constants;
/// Error type
pub mod error;
/// Query builder, options and wire types
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
