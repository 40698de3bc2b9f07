//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgCoordinateRepository`] - Coordinate cache storage and retrieval

pub mod pg_coordinate_repository;

pub use pg_coordinate_repository::PgCoordinateRepository;
