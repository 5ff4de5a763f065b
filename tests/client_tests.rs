//! Integration tests for the high-level Clnk client.
//!
//! These tests run the client against a mock GraphQL server and verify
//! token capture, header injection, error translation and result decoding.

use clnk_sdk::types::{CreateUrlInput, LoginInput, UrlListOptions, UrlLookup};
use clnk_sdk::{
    ApiKey, ApiUrl, ClnkClient, ClnkConfig, ClnkError, ErrorKind, GraphqlError, RateLimitConfig,
};
use serde_json::json;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_builder(server: &MockServer) -> clnk_sdk::ClnkConfigBuilder {
    ClnkConfig::builder()
        .api_url(ApiUrl::new(format!("{}/graphql", server.uri())).unwrap())
        .rate_limit(RateLimitConfig::new(100, Duration::from_secs(60)).unwrap())
}

fn client_for(server: &MockServer) -> ClnkClient {
    ClnkClient::new(config_builder(server).build().unwrap())
}

fn login_response(token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": {
            "login": {
                "accessToken": token,
                "refreshToken": "refresh-1",
                "user": { "id": "u1", "name": "Ada", "email": "ada@example.com", "emailVerified": true }
            }
        }
    }))
}

fn url_response(field: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": {
            field: {
                "id": "1",
                "url": "https://example.com/a/long/path",
                "shortUrl": "https://clnk.to/abc",
                "code": "abc"
            }
        }
    }))
}

fn error_response(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": null,
        "errors": [{ "message": message }]
    }))
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_login_stores_token_for_later_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "operationName": "Login",
            "variables": { "input": { "email": "ada@example.com", "password": "secret" } }
        })))
        .respond_with(login_response("tok-1"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "Me" })))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "me": { "id": "u1", "roles": [{ "id": "r1", "name": "user" }] } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.access_token().is_none());

    let auth = assert_ok!(client.login(&LoginInput::new("ada@example.com", "secret")).await);
    assert_eq!(auth.access_token.as_deref(), Some("tok-1"));
    assert_eq!(auth.user.and_then(|u| u.email_verified), Some(true));
    assert_eq!(
        client.access_token().map(|t| t.as_ref().to_string()),
        Some("tok-1".to_string())
    );

    let me = assert_ok!(client.get_current_user().await);
    assert_eq!(me.roles.map(|roles| roles.len()), Some(1));
}

#[tokio::test]
async fn test_login_without_token_leaves_state_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "login": { "accessToken": "", "user": null } }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.set_access_token("previous");

    assert_ok!(client.login(&LoginInput::new("ada@example.com", "secret")).await);
    assert_eq!(
        client.access_token().map(|t| t.as_ref().to_string()),
        Some("previous".to_string())
    );
}

#[tokio::test]
async fn test_queued_mutation_sees_token_from_earlier_login() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "Login" })))
        .respond_with(login_response("tok-queued").set_delay(Duration::from_millis(50)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "operationName": "CreateUrl" })))
        .and(header("Authorization", "Bearer tok-queued"))
        .respond_with(url_response("createUrl"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let login_input = LoginInput::new("ada@example.com", "secret");
    let create_input = CreateUrlInput::new("https://example.com/a/long/path");

    let (auth, url) = tokio::join!(client.login(&login_input), client.create_url(&create_input));

    assert_ok!(auth);
    assert_eq!(assert_ok!(url).short_url, "https://clnk.to/abc");
}

#[tokio::test]
async fn test_api_key_header_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-API-Key", "key-123"))
        .respond_with(url_response("getUrl"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ClnkClient::new(
        config_builder(&server)
            .api_key(ApiKey::new("key-123").unwrap())
            .build()
            .unwrap(),
    );

    assert_ok!(client.get_url(&UrlLookup::by_code("abc")).await);
}

// ============================================================================
// Error translation
// ============================================================================

#[tokio::test]
async fn test_not_authorized_maps_to_authorization_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response("Not authorized to list all URLs"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = assert_err!(client.get_all_urls(&UrlListOptions::default()).await);

    assert_eq!(error.kind(), ErrorKind::Authorization);
    assert_eq!(
        error.to_string(),
        "Authorization failed: You do not have permission to perform this action"
    );
    assert_eq!(error.graphql_errors()[0].message, "Not authorized to list all URLs");
}

#[tokio::test]
async fn test_authentication_message_maps_to_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response("Authentication required"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = assert_err!(client.get_current_user().await);

    assert!(matches!(error, ClnkError::Authentication { .. }));
    assert_eq!(
        error.to_string(),
        "Authentication failed: Please check your credentials or API key"
    );
}

#[tokio::test]
async fn test_other_messages_map_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response("Invalid code"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = assert_err!(client.create_url(&CreateUrlInput::new("https://example.com")).await);

    assert_eq!(error.kind(), ErrorKind::Api);
    assert_eq!(error.to_string(), "API Error: Invalid code");
}

#[tokio::test]
async fn test_structured_code_is_preferred() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "You must be logged in", "extensions": { "code": "UNAUTHENTICATED" } }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = assert_err!(client.get_current_user().await);

    assert_eq!(error.kind(), ErrorKind::Authentication);
}

#[tokio::test]
async fn test_http_failure_is_passed_through_as_transport() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = assert_err!(client.get_current_user().await);

    assert_eq!(error.kind(), ErrorKind::Transport);
    assert!(matches!(error, ClnkError::Transport(GraphqlError::Http(_))));
}

#[tokio::test]
async fn test_null_result_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "getUrl": null } })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = assert_err!(client.get_url(&UrlLookup::by_id("missing")).await);

    assert!(matches!(
        error,
        ClnkError::Transport(GraphqlError::MissingData { field: "getUrl" })
    ));
}

// ============================================================================
// Rate-limit retry
// ============================================================================

#[tokio::test]
async fn test_server_rate_limit_is_retried_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response("Rate limit exceeded"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(url_response("createUrl"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let url = assert_ok!(client.create_url(&CreateUrlInput::new("https://example.com")).await);

    assert_eq!(url.code.as_deref(), Some("abc"));
    assert_eq!(client.window_snapshot().request_count, 1);
}

#[tokio::test]
async fn test_second_rate_limit_error_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response("Rate limit exceeded"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = assert_err!(client.delete_url("1").await);

    assert_eq!(error.kind(), ErrorKind::RateLimited);
    assert!(error.is_rate_limited());
}

#[tokio::test]
async fn test_queries_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response("Rate limit exceeded"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = assert_err!(client.get_urls(&UrlListOptions::default()).await);

    assert_eq!(error.kind(), ErrorKind::RateLimited);
}
