#![allow(clippy::unwrap_used)]
// Integration tests for `RestconfClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use lsc_api::{Error, Method, ResourcePath, RestconfClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

const TOKEN: &str = "Basic YWRtaW46YWRtaW4=";

async fn setup() -> (MockServer, RestconfClient) {
    let server = MockServer::start().await;
    let addr = server.address();
    let client = RestconfClient::new(
        &addr.ip().to_string(),
        addr.port(),
        &SecretString::from(TOKEN.to_string()),
        &TransportConfig::default(),
    )
    .unwrap();
    (server, client)
}

fn node_path(name: &str) -> ResourcePath {
    ResourcePath::from_segments([
        "restconf",
        "config",
        "network-topology:network-topology",
        "topology",
        "topology-netconf",
        "node",
        name,
    ])
}

// ── Success paths ───────────────────────────────────────────────────

#[tokio::test]
async fn test_get_returns_body_and_sends_token() {
    let (server, client) = setup().await;

    let body = json!({ "node": [{ "node-id": "xr-1" }] });

    Mock::given(method("GET"))
        .and(path(
            "/restconf/config/network-topology:network-topology/topology/topology-netconf/node/xr-1",
        ))
        .and(header("Authorization", TOKEN))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client.get(&node_path("xr-1")).await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, body);
}

#[tokio::test]
async fn test_put_sends_json_body_and_accepts_201() {
    let (server, client) = setup().await;

    let payload = json!({ "node": [{ "node-id": "xr-1" }] });

    Mock::given(method("PUT"))
        .and(path(
            "/restconf/config/network-topology:network-topology/topology/topology-netconf/node/xr-1",
        ))
        .and(header("Content-Type", "application/json"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let body = serde_json::to_vec(&payload).unwrap();
    let resp = client.put(&node_path("xr-1"), body).await.unwrap();
    assert!(resp.is_empty());
}

#[tokio::test]
async fn test_delete_carries_no_content_headers() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete(&node_path("xr-1")).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert!(req.headers.get("content-type").is_none());
    assert!(req.headers.get("accept").is_none());
    assert_eq!(
        req.headers.get("authorization").unwrap().to_str().unwrap(),
        TOKEN
    );
}

#[tokio::test]
async fn test_reserved_characters_are_percent_encoded() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/pre/GigabitEthernet0%2F0%2F0%2F1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let path = ResourcePath::from_segments(["pre", "GigabitEthernet0/0/0/1"]);
    client.request(&path, Method::Get, None).await.unwrap();
}

// ── Error classification ────────────────────────────────────────────

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("data-missing"))
        .mount(&server)
        .await;

    let result = client.get(&node_path("ghost")).await;

    match result {
        Err(ref err @ Error::NotFound { ref path }) => {
            assert!(err.is_not_found());
            assert!(path.ends_with("node/ghost"), "unexpected path: {path}");
        }
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_2xx_preserves_controller_diagnostics() {
    let (server, client) = setup().await;

    let diagnostic = r#"{"errors":{"error":[{"error-type":"application","error-tag":"invalid-value","error-message":"Schema node with name mtu was not found"}]}}"#;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(400).set_body_string(diagnostic))
        .mount(&server)
        .await;

    let result = client.put(&node_path("xr-1"), b"{}".to_vec()).await;

    match result {
        Err(Error::Rejected { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, diagnostic);
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Grab a free port, then release it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RestconfClient::new(
        &addr.ip().to_string(),
        addr.port(),
        &SecretString::from(TOKEN.to_string()),
        &TransportConfig::default(),
    )
    .unwrap();

    let result = client.get(&node_path("xr-1")).await;

    match result {
        Err(ref err @ Error::Transport(_)) => assert!(!err.is_not_found()),
        other => panic!("expected Transport error, got: {other:?}"),
    }
}
