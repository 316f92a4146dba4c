use codechef_client::config::{Config, Credentials};
use codechef_client::constants::{DEFAULT_BASE_URL, DEFAULT_TOKEN_URL};
use std::env;

#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("CODECHEF_CLIENT_ID", "env-id");
        env::set_var("CODECHEF_CLIENT_SECRET", "env-secret");
        env::set_var("CODECHEF_REST_TIMEOUT", "12");
        env::set_var("CODECHEF_SCOPE", "public private");
    }

    let config = Config::new();
    assert_eq!(config.credentials.client_id, "env-id");
    assert_eq!(config.credentials.client_secret, "env-secret");
    assert_eq!(config.rest_api.timeout, 12);
    assert_eq!(config.scope, "public private");
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.token_url, DEFAULT_TOKEN_URL);

    unsafe {
        env::remove_var("CODECHEF_CLIENT_ID");
        env::remove_var("CODECHEF_CLIENT_SECRET");
        env::remove_var("CODECHEF_REST_TIMEOUT");
        env::remove_var("CODECHEF_SCOPE");
    }
}

#[test]
fn test_credentials_serialization_skips_secret() {
    let creds = Credentials {
        client_id: "id".to_string(),
        client_secret: "secret".to_string(),
    };

    let json = serde_json::to_string(&creds).unwrap();
    assert!(!json.contains("client_secret"));
    let deserialized: Credentials = serde_json::from_str(&json).unwrap();

    assert_eq!(deserialized.client_id, "id");
    assert!(deserialized.client_secret.is_empty());
}

#[test]
fn test_builder_overrides() {
    let config = Config::with_credentials("id", "secret")
        .with_timeout(3)
        .with_scope("public");
    assert_eq!(config.rest_api.timeout, 3);
    assert_eq!(config.scope, "public");
}
