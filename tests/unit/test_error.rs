use codechef_client::error::AppError;
use codechef_client::model::record::ErrorRecord;
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn test_app_error_display_http_status() {
    let error = AppError::HttpStatus(StatusCode::NOT_FOUND);
    assert_eq!(error.to_string(), "HTTPError: 404");
}

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_token_exchange() {
    let error = AppError::TokenExchange(r#"{"status":"error"}"#.to_string());
    assert_eq!(
        error.to_string(),
        r#"token exchange failed: {"status":"error"}"#
    );
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(_) => (),
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_error_record_serialization() {
    let record = ErrorRecord::from(AppError::HttpStatus(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(!record.success);
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({"success": false, "error": "HTTPError: 500"})
    );
}
