//! Entry and exit API handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use parking_core::{CreateTicketRequest, TicketError};

use crate::metrics::{
    BILLED_CENTS_TOTAL, PARKED_DURATION, TICKETS_CONSUMED_TOTAL, TICKETS_ISSUED_TOTAL,
    UNKNOWN_TICKETS_TOTAL,
};
use crate::state::AppState;

const MISSING_ENTRY_PARAMS: &str = "Missing 'plate' or 'parkingLot' query parameter";
const MISSING_TICKET_ID: &str = "Missing 'ticketId' query parameter";
const UNKNOWN_TICKET: &str = "Invalid or expired ticket ID";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Raw query string pairs, in request order.
///
/// Repeated keys are kept; lookups return the first occurrence.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First non-empty value for `key`. An empty first value counts as missing.
    pub fn first(&self, key: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .filter(|v| !v.is_empty())
    }
}

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

/// Response for a successful entry
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    pub ticket_id: String,
}

/// Response for a successful exit
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitResponse {
    pub license_plate: String,
    pub total_parked_time: String,
    pub parking_lot_id: String,
    pub charge: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Turn an undecodable query string into a JSON 400.
fn query_params(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<QueryParams, ApiError> {
    match query {
        Ok(Query(pairs)) => Ok(QueryParams::from(pairs)),
        Err(rejection) => {
            warn!("Rejected query string: {}", rejection.body_text());
            Err(api_error(StatusCode::BAD_REQUEST, rejection.body_text()))
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Record a vehicle entering a lot and issue a ticket
pub async fn vehicle_entry(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<EntryResponse>, ApiError> {
    let params = query_params(query)?;
    let (Some(plate), Some(lot_id)) = (params.first("plate"), params.first("parkingLot")) else {
        return Err(api_error(StatusCode::BAD_REQUEST, MISSING_ENTRY_PARAMS));
    };

    let request = CreateTicketRequest::new(plate, lot_id, state.clock().now());

    let ticket = state.ticket_store().create(request).map_err(|e| {
        error!("Failed to issue ticket: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    TICKETS_ISSUED_TOTAL.inc();
    info!(
        ticket_id = %ticket.id,
        plate = %ticket.plate,
        lot = %ticket.lot_id,
        entry_time = %ticket.entry_time,
        "Vehicle entered"
    );
    if let Ok(open) = state.ticket_store().count() {
        debug!(open_tickets = open, "Ticket issued");
    }

    Ok(Json(EntryResponse {
        ticket_id: ticket.id,
    }))
}

/// Consume a ticket at exit and bill the stay
pub async fn vehicle_exit(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ExitResponse>, ApiError> {
    let params = query_params(query)?;
    let Some(ticket_id) = params.first("ticketId") else {
        return Err(api_error(StatusCode::BAD_REQUEST, MISSING_TICKET_ID));
    };

    let ticket = match state.ticket_store().consume(&ticket_id) {
        Ok(ticket) => ticket,
        Err(TicketError::NotFound(_)) => {
            UNKNOWN_TICKETS_TOTAL.inc();
            warn!(ticket_id = %ticket_id, "Exit with invalid or expired ticket");
            return Err(api_error(StatusCode::NOT_FOUND, UNKNOWN_TICKET));
        }
        Err(e) => {
            error!("Failed to consume ticket {}: {}", ticket_id, e);
            return Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };
    TICKETS_CONSUMED_TOTAL.inc();

    let exit_time = state.clock().now();
    let charge = state
        .calculator()
        .charge(ticket.entry_time, exit_time)
        .map_err(|e| {
            error!(ticket_id = %ticket.id, "Failed to bill stay: {}", e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    BILLED_CENTS_TOTAL.inc_by(charge.amount.cents());
    PARKED_DURATION
        .with_label_values(&[])
        .observe(charge.duration.as_duration().as_secs_f64());

    let formatted_charge = state.format_charge(charge.amount);
    info!(
        ticket_id = %ticket.id,
        plate = %ticket.plate,
        lot = %ticket.lot_id,
        buckets = charge.buckets,
        charge = %formatted_charge,
        duration = %charge.duration,
        "Vehicle exited"
    );
    if let Ok(open) = state.ticket_store().count() {
        debug!(open_tickets = open, "Ticket consumed");
    }

    Ok(Json(ExitResponse {
        license_plate: ticket.plate,
        total_parked_time: charge.duration.to_string(),
        parking_lot_id: ticket.lot_id,
        charge: formatted_charge,
    }))
}
