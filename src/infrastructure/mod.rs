//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and outbound resolution.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations
//! - [`resolver`] - HTTP redirect-following map URL resolver

pub mod persistence;
pub mod resolver;
