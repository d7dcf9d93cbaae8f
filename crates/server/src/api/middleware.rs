//! Request metrics middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::metrics::{
    normalize_path, HTTP_REQUESTS_IN_FLIGHT, HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION,
    REJECTED_REQUESTS_TOTAL,
};

/// Holds one slot of the in-flight gauge; released on drop so cancelled
/// requests do not leak a count.
struct InFlight;

impl InFlight {
    fn enter() -> Self {
        HTTP_REQUESTS_IN_FLIGHT.inc();
        Self
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        HTTP_REQUESTS_IN_FLIGHT.dec();
    }
}

/// Records latency and counts for every request, and counts entry/exit
/// requests turned away with a client error by rejection reason.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().as_str().to_owned();
    let path = normalize_path(request.uri().path());

    let response = {
        let _slot = InFlight::enter();
        next.run(request).await
    };

    let status = response.status();
    let status_label = status.as_str();
    let labels = [method.as_str(), path.as_str(), status_label];

    HTTP_REQUEST_DURATION
        .with_label_values(&labels)
        .observe(started.elapsed().as_secs_f64());
    HTTP_REQUESTS_TOTAL.with_label_values(&labels).inc();

    if let Some(reason) = rejection_reason(&path, status.as_u16()) {
        REJECTED_REQUESTS_TOTAL
            .with_label_values(&[path.as_str(), reason])
            .inc();
    }

    response
}

/// Map a client error on a parking route to its rejection reason.
fn rejection_reason(path: &str, status: u16) -> Option<&'static str> {
    if path != "/entry" && path != "/exit" {
        return None;
    }
    match status {
        400 => Some("missing_parameter"),
        404 => Some("unknown_ticket"),
        405 => Some("method_not_allowed"),
        _ => None,
    }
}
