//! Application layer services implementing business logic.
//!
//! # Available Services
//!
//! - [`services::coordinate_service::CoordinateService`] - Cache-or-resolve orchestration

pub mod services;
