/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # CodeChef Client Prelude
//!
//! This module re-exports the types and traits needed for most interactions
//! with the CodeChef API.
//!
//! ## Usage
//!
//! ```rust
//! use codechef_client::prelude::*;
//!
//! let config = Config::with_credentials("client-id", "client-secret");
//! let options = ListOptions::new().with_limit(10);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the CodeChef API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

/// Uniform failure record
pub use crate::model::record::{ErrorRecord, into_json};

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Request dispatcher
pub use crate::client::Client;

/// Token manager
pub use crate::auth::Auth;

/// Access token
pub use crate::model::token::AccessToken;

// ============================================================================
// RESOURCE SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::{
    ContestService, IdeService, ProblemService, ReferenceService, SetService, SubmissionService,
    TodoService, UserService,
};

// ============================================================================
// REQUEST PARAMETERS
// ============================================================================

pub use crate::model::options::{InstitutionFilter, ListOptions, SortOrder, SubmissionFilter};
pub use crate::model::query::QueryParams;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;

/// HTTP method used by [`Client::request`]
pub use reqwest::Method;

/// JSON value returned by every resource method
pub use serde_json::Value;
