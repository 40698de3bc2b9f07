//! Map URL resolution contract.

use async_trait::async_trait;

use crate::domain::entities::Coordinates;

/// Errors produced while turning a map URL into coordinates.
///
/// Neither variant is retried: a network failure is surfaced as-is, and an
/// extraction failure is a content mismatch that will not change on retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    /// The outbound request could not complete (DNS, timeout, refused,
    /// redirect limit, malformed URL).
    #[error("Failed to extract coordinates: {0}")]
    Network(String),

    /// The resolved URL carries no `@lat,lon` segment.
    #[error("Failed to extract coordinates: Coordinates not found in URL")]
    Extraction { resolved_url: String },
}

/// Resolves a (possibly shortened) map URL to the coordinates embedded in
/// its final location.
///
/// # Implementations
///
/// - [`crate::infrastructure::resolver::HttpResolver`] - follows redirects with `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MapUrlResolver: Send + Sync {
    /// Follows redirects from `map_url` and extracts the coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Network`] if the request cannot complete.
    /// Returns [`ResolveError::Extraction`] if the resolved URL has no coordinates.
    async fn resolve(&self, map_url: &str) -> Result<Coordinates, ResolveError>;
}
