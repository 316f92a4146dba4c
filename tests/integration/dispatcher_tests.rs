use crate::common::client_with_token;
use assert_json_diff::assert_json_eq;
use codechef_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

const VERBS: [&str; 4] = ["GET", "POST", "PUT", "DELETE"];

fn method(verb: &str) -> Method {
    Method::from_bytes(verb.as_bytes()).unwrap()
}

#[tokio::test]
async fn test_bare_request_sends_only_auth_headers_for_every_verb() {
    let mut server = Server::new_async().await;
    let client = client_with_token(&server, "tok").await;

    for verb in VERBS {
        let mock = server
            .mock(verb, "/bare")
            .match_header("accept", "application/json")
            .match_header("authorization", "Bearer tok")
            .match_header("content-type", Matcher::Missing)
            .match_body("")
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let value: Value = client
            .request(method(verb), "bare", None, None::<&()>)
            .await
            .unwrap();
        assert_eq!(value, json!({"ok": true}), "verb {verb}");
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_query_and_body_are_both_attached_for_every_verb() {
    let mut server = Server::new_async().await;
    let client = client_with_token(&server, "tok").await;
    let body = json!({"name": "dp"});
    let mut query = QueryParams::new();
    query.push("offset", 10).push_list("fields", &["a", "b"]);

    for verb in VERBS {
        let mock = server
            .mock(verb, "/both")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("offset".into(), "10".into()),
                Matcher::UrlEncoded("fields".into(), "a,b".into()),
            ]))
            .match_header("authorization", "Bearer tok")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(body.clone()))
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let _: Value = client
            .request(method(verb), "both", Some(&query), Some(&body))
            .await
            .unwrap();
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_query_only_and_body_only() {
    let mut server = Server::new_async().await;
    let client = client_with_token(&server, "tok").await;
    let mut query = QueryParams::new();
    query.push("search", "chef");

    let query_only = server
        .mock("POST", "/query-only")
        .match_query(Matcher::UrlEncoded("search".into(), "chef".into()))
        .match_header("content-type", Matcher::Missing)
        .match_body("")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    let body_only = server
        .mock("PUT", "/body-only")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"x": 1})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let _: Value = client
        .post("query-only", Some(&query), None::<&()>)
        .await
        .unwrap();
    let _: Value = client
        .put("body-only", None, Some(&json!({"x": 1})))
        .await
        .unwrap();

    query_only.assert_async().await;
    body_only.assert_async().await;
}

#[tokio::test]
async fn test_not_found_becomes_http_error_record() {
    let mut server = Server::new_async().await;
    let client = client_with_token(&server, "tok").await;
    server
        .mock("GET", "/missing")
        .with_status(404)
        .with_body(r#"{"status":"error"}"#)
        .expect(2)
        .create_async()
        .await;

    let err = client.get::<Value>("missing", None).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));

    let record = client
        .request_record(Method::GET, "missing", None, None::<&()>)
        .await;
    assert_json_eq!(record, json!({"success": false, "error": "HTTPError: 404"}));
}

#[tokio::test]
async fn test_non_json_body_becomes_failure_record() {
    let mut server = Server::new_async().await;
    let client = client_with_token(&server, "tok").await;
    server
        .mock("GET", "/html")
        .with_status(200)
        .with_body("<html>not json</html>")
        .expect(2)
        .create_async()
        .await;

    match client.get::<Value>("html", None).await {
        Err(AppError::Deserialization(msg)) => assert!(!msg.is_empty()),
        other => panic!("Expected Deserialization error, got {other:?}"),
    }

    let record = client
        .request_record(Method::GET, "html", None, None::<&()>)
        .await;
    assert_eq!(record["success"], json!(false));
    assert!(record["error"].as_str().is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_json_body_is_returned_unchanged() {
    let mut server = Server::new_async().await;
    let client = client_with_token(&server, "tok").await;
    server
        .mock("GET", "/foo")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"foo":"bar"}"#)
        .create_async()
        .await;

    let value = client
        .request_record(Method::GET, "foo", None, None::<&()>)
        .await;
    assert_json_eq!(value, json!({"foo": "bar"}));
}

#[tokio::test]
async fn test_connection_failure_is_a_transport_error() {
    let config = Config::with_credentials("id", "secret")
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(5);
    let client = Client::new_lazy(config).unwrap();
    client.set_token(AccessToken::new("tok")).await;

    let err = client.get::<Value>("users/me", None).await.unwrap_err();
    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(err.status().is_none());
}
