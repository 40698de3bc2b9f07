//! HTTP request handlers for API endpoints.

pub mod coordinates;
pub mod health;

pub use coordinates::coordinates_handler;
pub use health::health_handler;
