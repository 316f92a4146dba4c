/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Authentication module for the CodeChef API
//!
//! This module owns the OAuth access token of a client:
//! - Initial token exchange with the client credentials grant
//! - Explicit token refresh (never triggered automatically)
//!
//! A failed initial exchange does not fail the client. It leaves it without a
//! token, and authenticated calls are then rejected by the server.

use crate::config::Config;
use crate::error::AppError;
use crate::model::token::{AccessToken, TokenRequest, TokenResponse};
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, info, warn};

/// Token manager for the CodeChef API
///
/// The token sits behind a `RwLock`: requests clone it under a read lock and
/// a refresh only takes the write lock to swap the value. Logins and refreshes
/// are serialized by a separate mutex.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    token: Arc<RwLock<Option<AccessToken>>>,
    refresh_lock: Mutex<()>,
}

impl Auth {
    /// Creates a new Auth instance without contacting the token endpoint
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and endpoints
    /// * `client` - HTTP client used for token exchanges
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            token: Arc::new(RwLock::new(None)),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Exchanges the client credentials for an access token
    ///
    /// # Returns
    /// * `Ok(Some(token))` - Token obtained and stored
    /// * `Ok(None)` - The endpoint refused the exchange; the payload is logged
    ///   and the client is left without a token
    /// * `Err(AppError)` - Transport failure while reaching the endpoint
    pub async fn login(&self) -> Result<Option<AccessToken>, AppError> {
        let _guard = self.refresh_lock.lock().await;
        info!("Requesting access token with client credentials");

        let request = TokenRequest::ClientCredentials {
            scope: &self.config.scope,
            client_id: &self.config.credentials.client_id,
            client_secret: &self.config.credentials.client_secret,
        };

        let token = match self.exchange(&request).await {
            Ok(payload) => {
                let token = parse_token(&payload);
                if token.is_none() {
                    error!("Error fetching access token: {}", payload);
                }
                token
            }
            Err(AppError::Deserialization(e)) => {
                error!("Token endpoint returned an undecodable body: {}", e);
                None
            }
            Err(e) => return Err(e),
        };

        let mut stored = self.token.write().await;
        *stored = token.clone();

        if token.is_some() {
            info!("✓ Access token obtained");
        }
        Ok(token)
    }

    /// Replaces the current token through the refresh grant
    ///
    /// The current access token is sent as the `refresh_token` value, even
    /// when the exchange returned a separate refresh token.
    ///
    /// # Returns
    /// * `Ok(token)` - The new token, already stored
    /// * `Err(AppError::Unauthorized)` - No token is held
    /// * `Err(AppError::TokenExchange)` - The endpoint refused the refresh;
    ///   the previous token is kept
    pub async fn refresh_token(&self) -> Result<AccessToken, AppError> {
        let _guard = self.refresh_lock.lock().await;

        let Some(current) = self.access_token().await else {
            warn!("No access token to refresh");
            return Err(AppError::Unauthorized);
        };

        info!("Refreshing access token");

        let request = TokenRequest::RefreshToken {
            refresh_token: &current,
            client_id: &self.config.credentials.client_id,
            client_secret: &self.config.credentials.client_secret,
        };

        let payload = self.exchange(&request).await?;

        let Some(token) = parse_token(&payload) else {
            warn!("Token refresh failed: {}", payload);
            return Err(AppError::TokenExchange(payload.to_string()));
        };

        let mut stored = self.token.write().await;
        *stored = Some(token.clone());

        info!("✓ Token refreshed successfully");
        Ok(token)
    }

    /// Current access token value, if any
    pub async fn access_token(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    /// Current token with its metadata, if any
    pub async fn token(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    /// Returns true when a token is held
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Stores a token obtained elsewhere
    pub async fn set_token(&self, token: AccessToken) {
        let mut stored = self.token.write().await;
        *stored = Some(token);
        debug!("Access token replaced by caller");
    }

    /// Clears the current token
    pub async fn logout(&self) {
        info!("Logging out");
        let mut stored = self.token.write().await;
        *stored = None;
    }

    async fn exchange(&self, request: &TokenRequest<'_>) -> Result<Value, AppError> {
        let url = &self.config.rest_api.token_url;
        debug!("Sending token request to: {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        // The endpoint reports failures in the body, so the status is only logged.
        debug!("Token endpoint status: {}", response.status());

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| AppError::Deserialization(e.to_string()))
    }
}

fn parse_token(payload: &Value) -> Option<AccessToken> {
    serde_json::from_value::<TokenResponse>(payload.clone())
        .ok()
        .and_then(TokenResponse::into_token)
}
