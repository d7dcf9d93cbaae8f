//! HTTP contract tests for the entry and exit endpoints.
//!
//! The router runs in process with a mock clock so parking time is
//! deterministic.

mod common;

use axum::http::StatusCode;
use chrono::TimeDelta;
use serde_json::json;

use common::{fixtures, TestFixture};
use parking_core::{BillingConfig, TicketStore};

// ============================================================================
// Entry
// ============================================================================

#[tokio::test]
async fn test_entry_issues_ticket() {
    let fixture = TestFixture::new();

    let response = fixture.post("/entry?plate=ABC-123&parkingLot=lot-7").await;

    assert_eq!(response.status, StatusCode::OK);
    let ticket_id = response.body["ticketId"].as_str().unwrap();
    assert!(!ticket_id.is_empty());
    assert_eq!(fixture.ticket_store.count().unwrap(), 1);
}

#[tokio::test]
async fn test_entry_ids_are_unique() {
    let fixture = TestFixture::new();

    let first = fixture.enter("ABC-123", "lot-7").await;
    let second = fixture.enter("ABC-123", "lot-7").await;

    assert_ne!(first, second);
    assert_eq!(fixture.ticket_store.count().unwrap(), 2);
}

#[tokio::test]
async fn test_entry_missing_plate_is_bad_request() {
    let fixture = TestFixture::new();

    let response = fixture.post("/entry?parkingLot=lot-7").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "error": "Missing 'plate' or 'parkingLot' query parameter" })
    );
    assert_eq!(fixture.ticket_store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_entry_missing_lot_is_bad_request() {
    let fixture = TestFixture::new();

    let response = fixture.post("/entry?plate=ABC-123").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "Missing 'plate' or 'parkingLot' query parameter"
    );
}

#[tokio::test]
async fn test_entry_empty_plate_is_bad_request() {
    let fixture = TestFixture::new();

    let response = fixture.post("/entry?plate=&parkingLot=lot-7").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_entry_repeated_parameter_uses_first_value() {
    let fixture = TestFixture::new();

    let response = fixture.post("/entry?plate=A&plate=B&parkingLot=L").await;

    assert_eq!(response.status, StatusCode::OK);
    let ticket_id = response.body["ticketId"].as_str().unwrap().to_string();

    let exit = fixture.exit(&ticket_id).await;
    assert_eq!(exit.body["licensePlate"], "A");
    assert_eq!(exit.body["parkingLotId"], "L");
}

#[tokio::test]
async fn test_entry_requires_post() {
    let fixture = TestFixture::new();

    let response = fixture.get("/entry?plate=ABC-123&parkingLot=lot-7").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

// ============================================================================
// Exit
// ============================================================================

#[tokio::test]
async fn test_exit_after_sixteen_minutes() {
    let fixture = TestFixture::new();
    let ticket_id = fixture.enter("ABC-123", "lot-7").await;

    fixture.clock.advance(TimeDelta::minutes(16));
    let response = fixture.exit(&ticket_id).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "licensePlate": "ABC-123",
            "totalParkedTime": "0 hours, 16 minutes, 0 seconds",
            "parkingLotId": "lot-7",
            "charge": "$5.00"
        })
    );
}

#[tokio::test]
async fn test_exit_after_exactly_fifteen_minutes() {
    let fixture = TestFixture::new();
    let ticket_id = fixture.enter("ABC-123", "lot-7").await;

    fixture.clock.advance(TimeDelta::minutes(15));
    let response = fixture.exit(&ticket_id).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["charge"], "$2.50");
}

#[tokio::test]
async fn test_immediate_exit_is_free() {
    let fixture = TestFixture::new();
    let ticket_id = fixture.enter("ABC-123", "lot-7").await;

    let response = fixture.exit(&ticket_id).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["charge"], "$0.00");
    assert_eq!(response.body["totalParkedTime"], "0 hours, 0 minutes, 0 seconds");
}

#[tokio::test]
async fn test_exit_formats_long_stay() {
    let fixture = TestFixture::new();
    let ticket_id = fixture.enter("ABC-123", "lot-7").await;

    fixture.clock.advance(TimeDelta::seconds(3661));
    let response = fixture.exit(&ticket_id).await;

    assert_eq!(response.body["totalParkedTime"], "1 hours, 1 minutes, 1 seconds");
    assert_eq!(response.body["charge"], "$12.50");
}

#[tokio::test]
async fn test_exit_uses_configured_rate_and_symbol() {
    let fixture = TestFixture::with_billing(BillingConfig {
        hourly_rate: 6.0,
        currency_symbol: "€".to_string(),
    });
    let ticket_id = fixture.enter("ABC-123", "lot-7").await;

    fixture.clock.advance(TimeDelta::minutes(40));
    let response = fixture.exit(&ticket_id).await;

    // 3 buckets at 1.50 each
    assert_eq!(response.body["charge"], "€4.50");
}

#[tokio::test]
async fn test_exit_missing_ticket_id_is_bad_request() {
    let fixture = TestFixture::new();

    let response = fixture.post("/exit").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({ "error": "Missing 'ticketId' query parameter" })
    );
}

#[tokio::test]
async fn test_exit_repeated_ticket_id_uses_first_value() {
    let fixture = TestFixture::new();
    let ticket_id = fixture.enter("ABC-123", "lot-7").await;

    let response = fixture
        .post(&format!("/exit?ticketId={}&ticketId=other", ticket_id))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["licensePlate"], "ABC-123");
}

#[tokio::test]
async fn test_exit_repeated_unknown_ticket_id_is_json_not_found() {
    let fixture = TestFixture::new();

    let response = fixture.post("/exit?ticketId=x&ticketId=y").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "error": "Invalid or expired ticket ID" }));
}

#[tokio::test]
async fn test_exit_unknown_ticket_is_not_found() {
    let fixture = TestFixture::new();

    let response = fixture.exit("not-a-real-ticket").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "error": "Invalid or expired ticket ID" }));
}

#[tokio::test]
async fn test_second_exit_is_not_found() {
    let fixture = TestFixture::new();
    let ticket_id = fixture.enter("ABC-123", "lot-7").await;

    let first = fixture.exit(&ticket_id).await;
    let second = fixture.exit(&ticket_id).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::NOT_FOUND);
    assert_eq!(second.body["error"], "Invalid or expired ticket ID");
    assert_eq!(fixture.ticket_store.count().unwrap(), 0);
}

#[tokio::test]
async fn test_exit_only_consumes_its_own_ticket() {
    let fixture = TestFixture::new();
    let mine = fixture.enter("ABC-123", "lot-7").await;
    let theirs = fixture.enter("XYZ-999", "lot-2").await;

    fixture.exit(&mine).await;
    let response = fixture.exit(&theirs).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["licensePlate"], "XYZ-999");
    assert_eq!(response.body["parkingLotId"], "lot-2");
}

#[tokio::test]
async fn test_exit_with_clock_before_entry_is_server_error() {
    let fixture = TestFixture::new();
    let ticket_id = fixture.enter("ABC-123", "lot-7").await;

    fixture.clock.set(fixtures::opening_time() - TimeDelta::minutes(5));
    let response = fixture.exit(&ticket_id).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body["error"].is_string());
}

// ============================================================================
// Health and metrics
// ============================================================================

#[tokio::test]
async fn test_health() {
    let fixture = TestFixture::new();

    let response = fixture.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_metrics_report_open_tickets() {
    let fixture = TestFixture::new();
    fixture.enter("ABC-123", "lot-7").await;

    let (status, body) = fixture.get_text("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("parking_tickets_issued_total"));
    assert!(body.contains("parking_open_tickets"));
}

#[tokio::test]
async fn test_metrics_count_rejected_requests() {
    let fixture = TestFixture::new();
    fixture.post("/entry?plate=ABC-123").await;
    fixture.exit("not-a-real-ticket").await;

    let (_, body) = fixture.get_text("/metrics").await;

    assert!(body.contains(r#"parking_rejected_requests_total{path="/entry",reason="missing_parameter"}"#));
    assert!(body.contains(r#"parking_rejected_requests_total{path="/exit",reason="unknown_ticket"}"#));
}
