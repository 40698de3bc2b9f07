//! Utility functions for URL processing.
//!
//! - [`coordinate_pattern`] - Coordinate extraction from resolved map URLs

pub mod coordinate_pattern;
