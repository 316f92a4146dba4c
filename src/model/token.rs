use crate::constants::TOKEN_STATUS_OK;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Access token held by the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// Bearer token sent with every request
    pub access_token: String,
    /// Refresh token returned by the exchange, if any
    ///
    /// Kept only as metadata: refresh requests send `access_token`.
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime in seconds reported by the token endpoint
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub expires_in: Option<u64>,
    /// Granted scope
    #[serde(default)]
    pub scope: Option<String>,
    /// Token type (usually "bearer")
    #[serde(default)]
    pub token_type: Option<String>,
    /// When this token was received
    #[serde(skip, default = "Utc::now")]
    pub obtained_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a token with only the access token value set
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: None,
            expires_in: None,
            scope: None,
            token_type: None,
            obtained_at: Utc::now(),
        }
    }

    /// Expiry instant, when the token endpoint reported a lifetime
    ///
    /// A lifetime too large to represent yields `None`, like no lifetime at all.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.expires_in?).ok()?;
        let lifetime = TimeDelta::try_seconds(secs)?;
        self.obtained_at.checked_add_signed(lifetime)
    }

    /// Checks if the token is expired or will expire within `margin_seconds`
    ///
    /// Tokens without a reported lifetime are never considered expired.
    /// The client never acts on this itself.
    #[must_use]
    pub fn is_expired(&self, margin_seconds: Option<i64>) -> bool {
        let Some(expires_at) = self.expires_at() else {
            return false;
        };
        let margin = margin_seconds.unwrap_or(0);
        match TimeDelta::try_seconds(margin).and_then(|m| expires_at.checked_sub_signed(m)) {
            Some(deadline) => Utc::now() >= deadline,
            // Margin reaches past the representable range in its own direction.
            None => margin > 0,
        }
    }
}

// The endpoint has sent the lifetime both as a number and as a string.
fn lenient_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.parse().ok(),
        _ => None,
    })
}

/// Body of a request to the token endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "grant_type", rename_all = "snake_case")]
pub enum TokenRequest<'a> {
    /// Exchange client id and secret for an access token
    ClientCredentials {
        /// Requested scope
        scope: &'a str,
        /// Client id
        client_id: &'a str,
        /// Client secret
        client_secret: &'a str,
    },
    /// Exchange the current token for a new one
    RefreshToken {
        /// Token being refreshed
        refresh_token: &'a str,
        /// Client id
        client_id: &'a str,
        /// Client secret
        client_secret: &'a str,
    },
}

/// Envelope returned by the token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// "OK" on success
    pub status: String,
    /// Payload holding the token data
    pub result: Option<TokenResult>,
}

/// `result` member of [`TokenResponse`]
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResult {
    /// Token data
    pub data: Option<AccessToken>,
}

impl TokenResponse {
    /// Returns the token when the exchange succeeded
    pub fn into_token(self) -> Option<AccessToken> {
        if self.status != TOKEN_STATUS_OK {
            return None;
        }
        self.result.and_then(|r| r.data)
    }
}
