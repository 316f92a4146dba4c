use crate::common::{TOKEN, create_test_config, mock_login, token_payload};
use codechef_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_login_stores_token_and_whoami_sends_it() {
    let mut server = Server::new_async().await;
    let login = mock_login(&mut server, TOKEN).await;
    let me = server
        .mock("GET", "/users/me")
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(200)
        .with_body(r#"{"status":"OK","result":{"data":{"content":{"username":"chef"}}}}"#)
        .create_async()
        .await;

    let client = Client::new(create_test_config(&server)).await.unwrap();
    assert_eq!(client.access_token().await.as_deref(), Some(TOKEN));

    let response = client.whoami().await.unwrap();
    assert_eq!(response["result"]["data"]["content"]["username"], "chef");

    login.assert_async().await;
    me.assert_async().await;
}

#[tokio::test]
async fn test_refused_login_leaves_client_degraded() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/oauth/token")
        .with_status(401)
        .with_body(r#"{"status":"error","result":{"errors":[{"code":"unauthorized"}]}}"#)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/users/me")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_body(r#"{"status":"error"}"#)
        .create_async()
        .await;

    let client = Client::new(create_test_config(&server)).await.unwrap();
    assert!(!client.auth().has_token().await);

    let err = client.whoami().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTPError: 401");
    assert_eq!(
        ErrorRecord::from(&err).to_value(),
        json!({"success": false, "error": "HTTPError: 401"})
    );

    login.assert_async().await;
    me.assert_async().await;
}

#[tokio::test]
async fn test_undecodable_token_body_leaves_client_degraded() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/oauth/token")
        .with_status(502)
        .with_body("<html>bad gateway</html>")
        .create_async()
        .await;

    let client = Client::new(create_test_config(&server)).await.unwrap();
    assert!(client.access_token().await.is_none());
}

#[tokio::test]
async fn test_refresh_replaces_token_for_next_request() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, TOKEN).await;
    let refresh = server
        .mock("POST", "/oauth/token")
        .match_body(Matcher::Json(json!({
            "grant_type": "refresh_token",
            "refresh_token": TOKEN,
            "client_id": "test-id",
            "client_secret": "test-secret"
        })))
        .with_status(200)
        .with_body(token_payload("tok-refreshed"))
        .create_async()
        .await;
    let with_old = server
        .mock("GET", "/users/me")
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .with_status(200)
        .with_body(r#"{"token":"old"}"#)
        .expect(1)
        .create_async()
        .await;
    let with_new = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer tok-refreshed")
        .with_status(200)
        .with_body(r#"{"token":"new"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(create_test_config(&server)).await.unwrap();
    assert_eq!(client.whoami().await.unwrap(), json!({"token": "old"}));

    let token = client.refresh_token().await.unwrap();
    assert_eq!(token.access_token, "tok-refreshed");
    assert_eq!(client.whoami().await.unwrap(), json!({"token": "new"}));

    refresh.assert_async().await;
    with_old.assert_async().await;
    with_new.assert_async().await;
}

#[tokio::test]
async fn test_refused_refresh_keeps_previous_token() {
    let mut server = Server::new_async().await;
    mock_login(&mut server, TOKEN).await;
    server
        .mock("POST", "/oauth/token")
        .match_body(Matcher::PartialJson(json!({"grant_type": "refresh_token"})))
        .with_status(200)
        .with_body(r#"{"status":"error","result":{"errors":[{"code":"invalid_grant"}]}}"#)
        .create_async()
        .await;

    let client = Client::new(create_test_config(&server)).await.unwrap();
    match client.refresh_token().await {
        Err(AppError::TokenExchange(payload)) => assert!(payload.contains("invalid_grant")),
        other => panic!("Expected TokenExchange error, got {other:?}"),
    }
    assert_eq!(client.access_token().await.as_deref(), Some(TOKEN));
}

#[test]
fn test_lazy_client_makes_no_exchange() {
    // Nothing listens on port 1; building the client must not touch the network.
    let config = Config::with_credentials("test-id", "test-secret").with_base_url("http://127.0.0.1:1");
    let client = Client::new_lazy(config).unwrap();
    assert!(tokio_test::block_on(client.access_token()).is_none());
    assert!(!tokio_test::block_on(client.auth().has_token()));
}
