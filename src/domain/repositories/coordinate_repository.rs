//! Repository trait for cached coordinate data access.

use crate::domain::entities::{CoordinateRecord, NewCoordinate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the coordinate cache.
///
/// The store is append-only: there is no update or delete operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCoordinateRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_coordinate.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoordinateRepository: Send + Sync {
    /// Finds the record stored for an exact `map_url`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(CoordinateRecord))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_by_url(&self, map_url: &str) -> Result<Option<CoordinateRecord>, AppError>;

    /// Inserts a new record and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record for the same `map_url` already
    /// exists (a concurrent writer won the insert).
    ///
    /// Returns [`AppError::Store`] on other database errors.
    async fn create(&self, new_coordinate: NewCoordinate) -> Result<i64, AppError>;

    /// Lists the most recently cached records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_recent(&self, limit: i64) -> Result<Vec<CoordinateRecord>, AppError>;

    /// Counts cached records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the backing store answers queries.
    async fn health_check(&self) -> bool;
}
