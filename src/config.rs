use crate::constants::{DEFAULT_BASE_URL, DEFAULT_SCOPE, DEFAULT_TIMEOUT_SECONDS, DEFAULT_TOKEN_URL};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// OAuth client credentials issued by CodeChef for an application
pub struct Credentials {
    /// Client id of the registered application
    pub client_id: String,
    /// Client secret of the registered application, never serialized
    #[serde(skip_serializing, default)]
    pub client_secret: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the CodeChef REST API
    pub base_url: String,
    /// URL of the OAuth token endpoint
    pub token_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the CodeChef API client
pub struct Config {
    /// OAuth client credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Scope requested by the client credentials grant
    pub scope: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Creates a configuration from environment variables (and a `.env` file if present)
    ///
    /// Reads `CODECHEF_CLIENT_ID`, `CODECHEF_CLIENT_SECRET`, `CODECHEF_SCOPE`,
    /// `CODECHEF_REST_BASE_URL`, `CODECHEF_TOKEN_URL` and `CODECHEF_REST_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let client_id = get_env_or_default("CODECHEF_CLIENT_ID", String::from("default_client_id"));
        let client_secret = get_env_or_default(
            "CODECHEF_CLIENT_SECRET",
            String::from("default_client_secret"),
        );

        if client_id == "default_client_id" {
            error!("CODECHEF_CLIENT_ID not found in environment variables or .env file");
        }
        if client_secret == "default_client_secret" {
            error!("CODECHEF_CLIENT_SECRET not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                client_id,
                client_secret,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "CODECHEF_REST_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                token_url: get_env_or_default(
                    "CODECHEF_TOKEN_URL",
                    String::from(DEFAULT_TOKEN_URL),
                ),
                timeout: get_env_or_default("CODECHEF_REST_TIMEOUT", DEFAULT_TIMEOUT_SECONDS),
            },
            scope: get_env_or_default("CODECHEF_SCOPE", String::from(DEFAULT_SCOPE)),
        }
    }

    /// Creates a configuration for the given credentials without reading the environment
    pub fn with_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                client_id: client_id.into(),
                client_secret: client_secret.into(),
            },
            rest_api: RestApiConfig::default(),
            scope: DEFAULT_SCOPE.to_string(),
        }
    }

    /// Points both the REST API and the token endpoint at another host
    ///
    /// The token endpoint becomes `<base_url>/oauth/token`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        self.rest_api.token_url = format!("{base_url}/oauth/token");
        self.rest_api.base_url = base_url;
        self
    }

    /// Sets the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }

    /// Sets the scope requested by the client credentials grant
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }
}
