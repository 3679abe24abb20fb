//! Dispatcher error-policy tests.
//!
//! # Invariants
//! - Transport failures (unreachable host, non-JSON body) propagate as
//!   `ClientError::Transport` carrying the route's context string.
//! - Payloads that do not match the declared model propagate as
//!   `ClientError::InvalidResponse`, including enum vocabulary failures.
//! - Non-2xx statuses with well-formed bodies are values, never errors.

mod common;

use actinia_client::{ClientError, RequestStatus};
use common::*;
use wiremock::matchers::{basic_auth, bearer_token, method, path};

#[tokio::test]
async fn test_unreachable_host_is_transport_error_with_context() {
    let client = ActiniaClient::builder()
        // Port 9 (discard) is never serving; connection is refused fast.
        .base_url("http://127.0.0.1:9".to_string())
        .build()
        .unwrap();

    let err = client.list_locations().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
    assert!(
        err.to_string()
            .contains("The following error occurred trying to access locations:")
    );
}

#[tokio::test]
async fn test_non_json_body_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/g/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.list_locations().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
}

#[tokio::test]
async fn test_missing_envelope_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/g/locations"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "locations": [], "status": "success" })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.list_locations().await.unwrap_err();
    // The body is JSON but lacks the `response` envelope.
    assert!(matches!(err, ClientError::Transport { .. }));
}

#[tokio::test]
async fn test_invalid_status_token_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/g/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": { "locations": [], "status": "dog" }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.list_locations().await.unwrap_err();
    match err {
        ClientError::InvalidResponse(message) => {
            assert!(message.contains("Server response status 'dog' is not a valid option"));
        }
        other => panic!("expected InvalidResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_400_with_valid_body_is_a_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/g/locations"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "response": { "status": "error", "message": "bad request" }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client.list_locations().await.unwrap();
    let error = result.error().expect("expected error model");
    assert_eq!(error.status, RequestStatus::Error);
    assert_eq!(error.message, "bad request");
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("locations/list_locations.json");

    Mock::given(method("GET"))
        .and(path("/g/locations"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = ActiniaClient::builder()
        .base_url(mock_server.uri())
        .token(secrecy::SecretString::new("test-token".to_string().into()))
        .build()
        .unwrap();

    assert!(client.list_locations().await.unwrap().is_success());
}

#[tokio::test]
async fn test_basic_auth_is_attached_when_no_token() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("locations/list_locations.json");

    Mock::given(method("GET"))
        .and(path("/g/locations"))
        .and(basic_auth("grass", "gis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let client = ActiniaClient::builder()
        .base_url(mock_server.uri())
        .basic_auth("grass", secrecy::SecretString::new("gis".to_string().into()))
        .build()
        .unwrap();

    assert!(client.list_locations().await.unwrap().is_success());
}
