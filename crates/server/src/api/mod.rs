pub mod handlers;
pub mod middleware;
pub mod parking;
pub mod routes;

pub use routes::create_router;
