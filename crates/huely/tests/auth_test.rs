// Integration tests for the link-button pairing flow using wiremock.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use huely::{Authenticator, Error, PairingOutcome};

async fn setup() -> (MockServer, Authenticator) {
    let server = MockServer::start().await;
    let auth = Authenticator::with_client(&server.uri(), reqwest::Client::new()).unwrap();
    (server, auth)
}

#[test]
fn test_new_rejects_blank_ip() {
    assert!(matches!(Authenticator::new(""), Err(Error::Config(_))));
}

#[tokio::test]
async fn test_button_not_pressed_is_an_outcome_not_an_error() {
    let (server, auth) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "error": { "type": 101, "address": "", "description": "link button not pressed" } }
        ])))
        .mount(&server)
        .await;

    let outcome = auth.authenticate().await.unwrap();
    match outcome {
        PairingOutcome::AwaitingButtonPress { reason } => {
            assert!(reason.contains("link button not pressed"), "got {reason:?}");
        }
        other => panic!("expected AwaitingButtonPress, got {other:?}"),
    }
}

#[tokio::test]
async fn test_granted_carries_the_new_key() {
    let (server, auth) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .and(body_json(json!({
            "devicetype": "my-app",
            "generateclientkey": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "success": { "username": "abc123", "clientkey": "deadbeef" } }
        ])))
        .mount(&server)
        .await;

    let outcome = auth.device_type("my-app").authenticate().await.unwrap();

    assert_eq!(
        outcome,
        PairingOutcome::Granted {
            app_key: "abc123".to_owned(),
            client_key: Some("deadbeef".to_owned()),
        }
    );
}

#[tokio::test]
async fn test_granted_without_client_key() {
    let (server, auth) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .and(body_json(json!({
            "devicetype": "huely",
            "generateclientkey": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "success": { "username": "abc123" } }
        ])))
        .mount(&server)
        .await;

    let outcome = auth
        .generate_client_key(false)
        .authenticate()
        .await
        .unwrap();
    assert_eq!(
        outcome,
        PairingOutcome::Granted {
            app_key: "abc123".to_owned(),
            client_key: None,
        }
    );
}

#[tokio::test]
async fn test_undecodable_reply_means_unreachable() {
    let (server, auth) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>router login</html>"))
        .mount(&server)
        .await;

    let err = auth.authenticate().await.unwrap_err();
    assert!(matches!(err, Error::BridgeUnreachable));
}

#[tokio::test]
async fn test_empty_reply_array_means_unreachable() {
    let (server, auth) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = auth.authenticate().await.unwrap_err();
    assert!(matches!(err, Error::BridgeUnreachable));
}

#[tokio::test]
async fn test_blank_device_type_is_rejected_before_the_request() {
    let (server, auth) = setup().await;

    // No mock mounted: the request must never go out.
    drop(server);

    let err = auth.device_type("").authenticate().await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
