//! Core domain entities.
//!
//! - [`Coordinates`] - A latitude/longitude pair
//! - [`CoordinateRecord`] - A cached pair keyed by the submitted map URL
//! - [`NewCoordinate`] - Input for creating a record

pub mod coordinate;

pub use coordinate::{CoordinateRecord, Coordinates, NewCoordinate};
