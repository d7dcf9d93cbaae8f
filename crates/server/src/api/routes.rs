use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::metrics_middleware, parking};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Parking
        .route("/entry", post(parking::vehicle_entry))
        .route("/exit", post(parking::vehicle_exit))
        // Health and metrics
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
