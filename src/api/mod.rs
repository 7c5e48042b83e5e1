//! API Module
//!
//! HTTP handlers and routing exposing the cache service and track library.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
