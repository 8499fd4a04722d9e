// Integration tests for bridge discovery.
//
// mDNS browsing needs a real bridge on the network, so these tests pin
// the timeout low and exercise the timeout path plus the cloud-directory
// fallback against wiremock.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use huely::{BridgeDiscovery, Error};

#[tokio::test]
async fn test_mdns_timeout_without_fallback() {
    let started = std::time::Instant::now();

    let err = BridgeDiscovery::new()
        .timeout(Duration::from_millis(50))
        .disable_url_fallback()
        .discover()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::DiscoveryTimeout | Error::Mdns(_)));
    // The deadline bounds the whole browse, with headroom for a slow runner.
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn test_fallback_returns_first_directory_entry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "001788fffe4f1a2b", "internalipaddress": "192.168.1.23" },
            { "id": "001788fffe99aabb", "internalipaddress": "192.168.1.99" }
        ])))
        .mount(&server)
        .await;

    let bridge = BridgeDiscovery::new()
        .timeout(Duration::from_millis(50))
        .discovery_url(server.uri())
        .discover()
        .await
        .unwrap();

    assert_eq!(bridge.instance, "N/A");
    assert_eq!(bridge.host_name, "001788fffe4f1a2b");
    assert_eq!(bridge.ip_address, "192.168.1.23");
}

#[tokio::test]
async fn test_empty_directory_means_no_bridge() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = BridgeDiscovery::new()
        .timeout(Duration::from_millis(50))
        .discovery_url(server.uri())
        .discover()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::BridgeNotFound));
}

#[tokio::test]
async fn test_rate_limited_directory_surfaces_too_many_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = BridgeDiscovery::new()
        .timeout(Duration::from_millis(50))
        .discovery_url(server.uri())
        .discover()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::TooManyAttempts));
}
