//! Transport adapter integration tests
//!
//! Exercises bearer injection, the 401 interceptor and the error taxonomy
//! against a mock HTTP server.

mod support;

use std::sync::Arc;
use std::time::Duration;

use ecotrack_core::CredentialStore;
use ecotrack_domain::{ApiError, ClientConfig, Dashboard};
use ecotrack_infra::{ApiClient, MemoryCredentialStore};
use support::{api_client, RecordingSession};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn bearer_header_carries_stored_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .and(header("Authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalEmissions": 4.2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_credential("T"));
    let (api, _session) = api_client(&server.uri(), store);

    let dashboard: Dashboard = api.get("/dashboard", &Vec::new()).await.expect("dashboard");
    assert_eq!(dashboard.total_emissions, 4.2);
}

#[tokio::test]
async fn no_authorization_header_without_credential() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::new());
    let (api, _session) = api_client(&server.uri(), store);

    let _: Dashboard = api.get("/dashboard", &Vec::new()).await.expect("dashboard");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(
        !requests[0].headers.contains_key("Authorization"),
        "request must not carry a credential that does not exist"
    );
}

#[tokio::test]
async fn unauthorized_clears_credential_and_navigates_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "jwt expired"
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_credential("stale"));
    let (api, session) = api_client(&server.uri(), store.clone());

    let result: Result<Dashboard, _> = api.get("/dashboard", &Vec::new()).await;
    let err = result.unwrap_err();

    assert!(matches!(err, ApiError::AuthExpired(ref m) if m == "jwt expired"));
    assert!(store.get().is_none(), "credential must be cleared immediately");
    assert_eq!(session.count(), 1, "exactly one sign-in navigation");
}

#[tokio::test]
async fn each_unauthorized_response_navigates_again() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_credential("stale"));
    let (api, session) = api_client(&server.uri(), store.clone());

    let _: Result<Dashboard, _> = api.get("/dashboard", &Vec::new()).await;
    store.set("stale-again");
    let _: Result<Dashboard, _> = api.get("/dashboard", &Vec::new()).await;

    assert_eq!(session.count(), 2, "one navigation per interception");
    assert!(store.get().is_none());
}

#[tokio::test]
async fn client_errors_surface_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "Quantity is required"
        })))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_credential("T"));
    let (api, session) = api_client(&server.uri(), store);

    let err = api.get::<Dashboard>("/dashboard", &Vec::new()).await.unwrap_err();
    match err {
        ApiError::Client { status, message, body } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Quantity is required");
            assert!(body.is_some(), "decoded error body is preserved");
        }
        other => panic!("expected client error, got {other:?}"),
    }
    assert_eq!(session.count(), 0, "non-401 errors never navigate");
}

#[tokio::test]
async fn server_errors_are_retriable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_credential("T"));
    let (api, _session) = api_client(&server.uri(), store);

    let err = api.get::<Dashboard>("/dashboard", &Vec::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 503, .. }));
    assert!(err.is_retriable());
}

#[tokio::test]
async fn network_failure_has_no_status() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = Arc::new(MemoryCredentialStore::with_credential("T"));
    let (api, session) = api_client(&format!("http://{addr}"), store.clone());

    let err = api.get::<Dashboard>("/dashboard", &Vec::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert!(err.status().is_none());
    assert!(store.get().is_some(), "network failures never touch the credential");
    assert_eq!(session.count(), 0);
}

#[tokio::test]
async fn slow_responses_time_out_as_network_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryCredentialStore::with_credential("T"));
    let session = RecordingSession::new();
    let config = ClientConfig::production(server.uri());
    let api = ApiClient::with_timeout(&config, store, session, Duration::from_millis(50))
        .expect("api client");

    let err = api.get::<Dashboard>("/dashboard", &Vec::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)));
    assert!(err.is_retriable());
}
