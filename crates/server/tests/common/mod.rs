//! Common test utilities for in-process API testing.
//!
//! This module provides a test fixture that builds the router with an
//! in-memory ticket store and a controllable clock, so tests can exercise
//! the HTTP contract without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use parking_core::{
    testing::MockClock, BillingConfig, Config, MemoryTicketStore, ServerConfig, TicketStore,
};

/// Re-export fixtures for test convenience
pub use parking_core::testing::fixtures;

/// Test fixture for API testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_entry() {
///     let fixture = TestFixture::new();
///
///     let response = fixture.post("/entry?plate=ABC&parkingLot=A").await;
///
///     assert_eq!(response.status, 200);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Clock shared with the handlers - advance it to simulate parking time
    pub clock: MockClock,
    /// Ticket store shared with the handlers
    pub ticket_store: Arc<MemoryTicketStore>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with default billing.
    pub fn new() -> Self {
        Self::with_billing(BillingConfig::default())
    }

    /// Create a test fixture with custom billing configuration.
    pub fn with_billing(billing: BillingConfig) -> Self {
        let clock = MockClock::new(fixtures::opening_time());
        let ticket_store = Arc::new(MemoryTicketStore::new());

        let config = Config {
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            billing,
        };

        let state = Arc::new(parking_server::state::AppState::new(
            config,
            Arc::clone(&ticket_store) as Arc<dyn TicketStore>,
            Arc::new(clock.clone()),
        ));

        let router = parking_server::api::create_router(state);

        Self {
            router,
            clock,
            ticket_store,
        }
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path).await
    }

    /// Send a POST request with no body.
    pub async fn post(&self, path: &str) -> TestResponse {
        self.request("POST", path).await
    }

    /// Issue a ticket for the given plate and lot, returning its id.
    pub async fn enter(&self, plate: &str, lot: &str) -> String {
        let response = self
            .post(&format!("/entry?plate={}&parkingLot={}", plate, lot))
            .await;
        assert_eq!(response.status, StatusCode::OK, "entry failed: {:?}", response.body);
        response.body["ticketId"]
            .as_str()
            .expect("ticketId missing from entry response")
            .to_string()
    }

    /// Present a ticket at exit.
    pub async fn exit(&self, ticket_id: &str) -> TestResponse {
        self.post(&format!("/exit?ticketId={}", ticket_id)).await
    }

    /// Send a request and return the raw body text.
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let (status, bytes) = self.send("GET", path).await;
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str) -> TestResponse {
        let (status, body_bytes) = self.send(method, path).await;

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    async fn send(&self, method: &str, path: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        (status, body_bytes.to_vec())
    }
}
