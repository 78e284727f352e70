use crate::common;
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use mytarget_client::prelude::*;

#[tokio::test]
async fn call_returns_parsed_json_on_200() {
    let (mut server, client) = common::authenticated().await;
    let mock = server
        .mock("GET", "/api/v1/custom.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items":[1,2]}"#)
        .create_async()
        .await;

    let body = client
        .http()
        .call(Method::GET, "/v1/custom.json", RequestOptions::new())
        .await
        .unwrap();

    assert_json_eq!(body, json!({"items": [1, 2]}));
    mock.assert_async().await;
}

#[tokio::test]
async fn bad_request_maps_to_validation_error() {
    let (mut server, client) = common::authenticated().await;
    server
        .mock("GET", "/api/v1/campaigns.json")
        .with_status(400)
        .with_body(r#"{"error":{"code":"invalid_status"}}"#)
        .create_async()
        .await;

    match client.campaigns.list(&CampaignListParams::new()).await {
        Err(AppError::Validation(body)) => {
            assert_json_eq!(body, json!({"error": {"code": "invalid_status"}}))
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let (mut server, client) = common::authenticated().await;
    server
        .mock("GET", "/api/v1/user.json")
        .with_status(401)
        .with_body(r#"{"error":"invalid_token"}"#)
        .create_async()
        .await;

    match client.user.get().await {
        Err(AppError::Auth(body)) => assert_eq!(body["error"], "invalid_token"),
        other => panic!("Expected Auth error, got {other:?}"),
    }
}

#[tokio::test]
async fn other_statuses_map_to_generic_error() {
    let (mut server, client) = common::authenticated().await;
    for status in [201_usize, 302, 403, 404, 500, 503] {
        let path = format!("/api/v1/status/{status}.json");
        let mock = server
            .mock("GET", path.as_str())
            .with_status(status)
            .with_body(r#"{"error":"nope"}"#)
            .create_async()
            .await;

        let result = client
            .http()
            .get(&format!("/v1/status/{status}.json"), QueryParams::new())
            .await;
        match result {
            Err(AppError::Api { status: s, body }) => {
                assert_eq!(s.as_u16() as usize, status);
                assert_json_eq!(body, json!({"error": "nope"}));
            }
            other => panic!("Expected Api error for {status}, got {other:?}"),
        }
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let (mut server, client) = common::authenticated().await;
    server
        .mock("GET", "/api/v1/clients.json")
        .with_status(502)
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let err = client.clients.list().await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(502));
    assert_eq!(err.body(), Some(&json!("Bad Gateway")));
}

#[tokio::test]
async fn invalid_json_on_success_is_a_json_error() {
    let (mut server, client) = common::authenticated().await;
    server
        .mock("GET", "/api/v1/user.json")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    assert!(matches!(client.user.get().await, Err(AppError::Json(_))));
}

#[tokio::test]
async fn bearer_token_is_attached_once_set() {
    let mut server = Server::new_async().await;
    let client = common::client_for(&server, false);

    let anonymous = server
        .mock("GET", "/api/v1/user.json")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .with_body(r#"{"error":"unauthorized"}"#)
        .create_async()
        .await;
    assert!(matches!(client.user.get().await, Err(AppError::Auth(_))));
    anonymous.assert_async().await;

    client.set_auth("abc123").await;
    let authenticated = server
        .mock("GET", "/api/v1/user.json")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_body(r#"{"username":"agency"}"#)
        .create_async()
        .await;
    let user = client.user.get().await.unwrap();
    assert_eq!(user["username"], "agency");
    authenticated.assert_async().await;
}

#[tokio::test]
async fn token_applies_to_every_resource() {
    let (mut server, client) = common::authenticated().await;
    let mock = server
        .mock("GET", Matcher::Regex(r"^/api/v1/".to_string()))
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body("{}")
        .expect(4)
        .create_async()
        .await;

    client.clients.list().await.unwrap();
    client.campaigns.list(&CampaignListParams::new()).await.unwrap();
    client.banners.list(&BannerListParams::new()).await.unwrap();
    client.faststat.users(1.into()).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn debug_mode_does_not_change_requests() {
    let mut server = Server::new_async().await;
    let client = common::client_for(&server, true);
    assert!(client.http().is_debug());

    let mock = server
        .mock("GET", "/api/v1/clients.json")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    assert_json_eq!(client.clients.list().await.unwrap(), json!([]));
    mock.assert_async().await;
}

#[tokio::test]
async fn call_as_decodes_into_typed_model() {
    let (mut server, client) = common::authenticated().await;
    let mock = server
        .mock("POST", "/api/v2/oauth2/token.json")
        .with_status(200)
        .with_body(r#"{"access_token":"AT","token_type":"Bearer","expires_in":3600,"refresh_token":"RT"}"#)
        .create_async()
        .await;

    let token: TokenResponse = client
        .http()
        .call_as(Method::POST, "/v2/oauth2/token.json", RequestOptions::new())
        .await
        .unwrap();

    assert_eq!(token.access_token, "AT");
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.refresh_token.as_deref(), Some("RT"));
    mock.assert_async().await;
}

#[tokio::test]
async fn call_as_with_mismatched_body_is_a_json_error() {
    let (mut server, client) = common::authenticated().await;
    let mock = server
        .mock("POST", "/api/v2/oauth2/token.json")
        .with_status(200)
        .with_body(r#"{"tokens_left":0}"#)
        .create_async()
        .await;

    let result = client
        .http()
        .call_as::<TokenResponse>(Method::POST, "/v2/oauth2/token.json", RequestOptions::new())
        .await;

    assert!(matches!(result, Err(AppError::Json(_))));
    mock.assert_async().await;
}
