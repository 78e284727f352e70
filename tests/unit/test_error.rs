use mytarget_client::error::AppError;
use reqwest::StatusCode;
use serde_json::json;

#[test]
fn test_bad_request_is_validation_error() {
    let error = AppError::from_response(StatusCode::BAD_REQUEST, r#"{"error":"bad status"}"#);
    match error {
        AppError::Validation(body) => assert_eq!(body, json!({"error": "bad status"})),
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn test_unauthorized_is_auth_error() {
    let error = AppError::from_response(StatusCode::UNAUTHORIZED, r#"{"error":"invalid_token"}"#);
    match error {
        AppError::Auth(body) => assert_eq!(body["error"], "invalid_token"),
        other => panic!("Expected Auth error, got {other:?}"),
    }
}

#[test]
fn test_other_statuses_are_generic_errors() {
    for status in [
        StatusCode::CREATED,
        StatusCode::MOVED_PERMANENTLY,
        StatusCode::FORBIDDEN,
        StatusCode::NOT_FOUND,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let error = AppError::from_response(status, r#"{"error":"nope"}"#);
        match error {
            AppError::Api { status: s, body } => {
                assert_eq!(s, status);
                assert_eq!(body, json!({"error": "nope"}));
            }
            other => panic!("Expected Api error for {status}, got {other:?}"),
        }
    }
}

#[test]
fn test_invalid_json_body_falls_back_to_text() {
    let error = AppError::from_response(StatusCode::BAD_REQUEST, "plain text failure");
    assert_eq!(error.body(), Some(&json!("plain text failure")));
    assert_eq!(error.status(), Some(StatusCode::BAD_REQUEST));
}

#[test]
fn test_app_error_display_validation() {
    let error = AppError::Validation(json!({"field": "required"}));
    assert_eq!(error.to_string(), r#"validation error: {"field":"required"}"#);
}

#[test]
fn test_app_error_display_auth() {
    let error = AppError::Auth(json!("expired"));
    assert_eq!(error.to_string(), r#"auth error: "expired""#);
}

#[test]
fn test_app_error_display_api() {
    let error = AppError::Api {
        status: StatusCode::NOT_FOUND,
        body: json!({}),
    };
    assert!(error.to_string().contains("404"));
}

#[test]
fn test_app_error_display_not_implemented() {
    let error = AppError::NotImplemented("user.update");
    assert_eq!(error.to_string(), "not implemented: user.update");
    assert_eq!(error.status(), None);
    assert_eq!(error.body(), None);
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("date_to is required".to_string());
    assert_eq!(error.to_string(), "invalid input: date_to is required");
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}
