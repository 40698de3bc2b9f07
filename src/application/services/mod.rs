//! Business logic services for the application layer.

pub mod coordinate_service;

pub use coordinate_service::{CoordinateLookup, CoordinateService};
