//! Prometheus metrics for observability.
//!
//! This module provides metrics for monitoring the parking server:
//! - HTTP request metrics (latency, counts, in flight)
//! - Ticket issuance and consumption
//! - Billing totals and parked durations
//! - Open ticket count (collected when scraped)

use once_cell::sync::Lazy;
use prometheus::{
    self, Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};

/// Global metrics registry.
pub static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::new();
    register_metrics(&registry);
    registry
});

/// Routes reported verbatim in path labels; anything else is folded into "other".
const KNOWN_PATHS: &[&str] = &["/entry", "/exit", "/health", "/metrics"];

// =============================================================================
// HTTP Request Metrics
// =============================================================================

/// HTTP request duration in seconds.
pub static HTTP_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "parking_http_request_duration_seconds",
            "HTTP request duration in seconds",
        )
        .buckets(vec![
            0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
        ]),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests total count.
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("parking_http_requests_total", "Total HTTP requests"),
        &["method", "path", "status"],
    )
    .unwrap()
});

/// HTTP requests currently in flight.
pub static HTTP_REQUESTS_IN_FLIGHT: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new(
        "parking_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
    )
    .unwrap()
});

/// Entry/exit requests turned away with a client error.
pub static REJECTED_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "parking_rejected_requests_total",
            "Entry and exit requests rejected with a client error",
        ),
        &["path", "reason"],
    )
    .unwrap()
});

// =============================================================================
// Ticket Metrics
// =============================================================================

/// Tickets issued at entry.
pub static TICKETS_ISSUED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "parking_tickets_issued_total",
        "Total tickets issued since startup",
    )
    .unwrap()
});

/// Tickets consumed at exit.
pub static TICKETS_CONSUMED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "parking_tickets_consumed_total",
        "Total tickets consumed at exit since startup",
    )
    .unwrap()
});

/// Exit attempts with an unknown or already consumed ticket.
pub static UNKNOWN_TICKETS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "parking_unknown_tickets_total",
        "Exit attempts with an invalid or expired ticket ID",
    )
    .unwrap()
});

/// Tickets currently open (collected dynamically).
pub static OPEN_TICKETS: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new("parking_open_tickets", "Number of tickets not yet consumed").unwrap()
});

// =============================================================================
// Billing Metrics
// =============================================================================

/// Sum of all charges, in cents.
pub static BILLED_CENTS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "parking_billed_cents_total",
        "Total amount billed at exit, in cents",
    )
    .unwrap()
});

/// Parked duration in seconds.
pub static PARKED_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new("parking_parked_duration_seconds", "Time between entry and exit")
            .buckets(vec![
                900.0, 1800.0, 3600.0, 7200.0, 14400.0, 28800.0, 86400.0, 604800.0,
            ]),
        &[],
    )
    .unwrap()
});

// =============================================================================
// Registration
// =============================================================================

fn register_metrics(registry: &Registry) {
    // HTTP
    registry
        .register(Box::new(HTTP_REQUEST_DURATION.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(HTTP_REQUESTS_IN_FLIGHT.clone()))
        .unwrap();
    registry
        .register(Box::new(REJECTED_REQUESTS_TOTAL.clone()))
        .unwrap();

    // Tickets
    registry
        .register(Box::new(TICKETS_ISSUED_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(TICKETS_CONSUMED_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(UNKNOWN_TICKETS_TOTAL.clone()))
        .unwrap();
    registry.register(Box::new(OPEN_TICKETS.clone())).unwrap();

    // Billing
    registry
        .register(Box::new(BILLED_CENTS_TOTAL.clone()))
        .unwrap();
    registry
        .register(Box::new(PARKED_DURATION.clone()))
        .unwrap();
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}

/// Collect dynamic metrics from current application state.
///
/// Called before encoding so gauges reflect the store at scrape time.
pub fn collect_dynamic_metrics(state: &crate::state::AppState) {
    if let Ok(count) = state.ticket_store().count() {
        OPEN_TICKETS.set(i64::try_from(count).unwrap_or(i64::MAX));
    }
}

/// Normalize a path for metric labels (unknown paths collapse to "other").
pub fn normalize_path(path: &str) -> String {
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    if KNOWN_PATHS.contains(&trimmed) {
        trimmed.to_string()
    } else {
        "other".to_string()
    }
}
