//! HTTP front end for the parking ticket service.

pub mod api;
pub mod metrics;
pub mod state;
