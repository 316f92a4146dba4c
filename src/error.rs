/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Error type shared by every part of the client
//!
//! Transport faults, HTTP status failures and body decode failures are kept as
//! separate variants so callers can tell them apart. Any error can be folded
//! into the uniform [`ErrorRecord`](crate::model::record::ErrorRecord) shape.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure (DNS, connection refused, timeout, ...)
    Network(reqwest::Error),
    /// The server answered with a non-success status code
    HttpStatus(StatusCode),
    /// The response body could not be decoded as JSON
    Deserialization(String),
    /// No access token is held by the client
    Unauthorized,
    /// The token endpoint answered with a non-OK status
    TokenExchange(String),
    /// JSON (de)serialization error outside of response decoding
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::HttpStatus(status) => write!(f, "HTTPError: {}", status.as_u16()),
            AppError::Deserialization(msg) => write!(f, "{msg}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::TokenExchange(payload) => write!(f, "token exchange failed: {payload}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return AppError::HttpStatus(status);
        }
        AppError::Network(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(error)
    }
}

impl AppError {
    /// Returns true when the failure happened before any HTTP status was received
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_))
    }

    /// HTTP status code carried by the error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::HttpStatus(status) => Some(*status),
            _ => None,
        }
    }
}
