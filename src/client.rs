/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client for the CodeChef API
//!
//! This module provides the request dispatcher used by every resource method:
//! - Bearer authentication with the token held by [`Auth`]
//! - Optional query parameters and JSON body for every verb
//! - Status check before decoding, with failures normalized into [`AppError`]
//!
//! # Example
//! ```ignore
//! use codechef_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! let me = client.whoami().await?;
//! ```

use crate::auth::Auth;
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::query::QueryParams;
use crate::model::record::into_json;
use crate::model::token::AccessToken;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Client for the CodeChef API
///
/// Holds the configuration, the token manager and a pooled HTTP client.
/// The client is `Send + Sync` and can be shared behind an `Arc`.
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client and performs the initial token exchange
    ///
    /// A refused exchange is logged and leaves the client without a token;
    /// only transport failures are returned as errors.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let client = Self::new_lazy(config)?;
        client.auth.login().await?;
        Ok(client)
    }

    /// Creates a new client without contacting the token endpoint
    ///
    /// Use [`Client::login`] or [`Client::set_token`] before making requests.
    pub fn new_lazy(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Creates a client from environment configuration and logs in
    pub async fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new()).await
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, query, None::<&()>).await
    }

    /// Makes a POST request
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, query, body).await
    }

    /// Makes a PUT request
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        self.request(Method::PUT, path, query, body).await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
    ) -> Result<T, AppError> {
        self.request(Method::DELETE, path, query, None::<&()>).await
    }

    /// Performs one authenticated exchange
    ///
    /// The query string is attached only when `query` is given and the JSON
    /// body only when `body` is given. A non-success status is returned as
    /// [`AppError::HttpStatus`] before any decoding is attempted, and a body
    /// that is not valid JSON as [`AppError::Deserialization`].
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base URL, or an absolute URL
    /// * `query` - Optional query parameters
    /// * `body` - Optional JSON body
    pub async fn request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(ACCEPT, "application/json");

        match self.auth.access_token().await {
            Some(token) => request = request.bearer_auth(token),
            None => warn!("No access token held, sending request to {} unauthenticated", url),
        }

        if let Some(query) = query {
            request = request.query(query);
        }

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").json(body);
        }

        let response = request.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::HttpStatus(status));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            error!("Failed to decode response from {}: {}", url, e);
            AppError::Deserialization(e.to_string())
        })
    }

    /// Same exchange as [`Client::request`], folding failures into an error record
    ///
    /// Returns the decoded body unchanged, or `{"success": false, "error": ...}`.
    pub async fn request_record<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&B>,
    ) -> Value {
        into_json(self.request(method, path, query, body).await)
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Performs the client credentials exchange again
    pub async fn login(&self) -> Result<Option<AccessToken>, AppError> {
        self.auth.login().await
    }

    /// Replaces the current token through the refresh grant
    pub async fn refresh_token(&self) -> Result<AccessToken, AppError> {
        self.auth.refresh_token().await
    }

    /// Current access token value, if any
    pub async fn access_token(&self) -> Option<String> {
        self.auth.access_token().await
    }

    /// Stores a token obtained elsewhere
    pub async fn set_token(&self, token: AccessToken) {
        self.auth.set_token(token).await
    }

    /// Clears the current token
    pub async fn logout(&self) {
        self.auth.logout().await
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Gets the configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }
}
