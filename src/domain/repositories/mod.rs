//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod coordinate_repository;

pub use coordinate_repository::CoordinateRepository;

#[cfg(test)]
pub use coordinate_repository::MockCoordinateRepository;
