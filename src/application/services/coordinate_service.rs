//! Cache-or-resolve orchestration for map URLs.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Coordinates, NewCoordinate};
use crate::domain::repositories::CoordinateRepository;
use crate::domain::resolver::MapUrlResolver;
use crate::error::AppError;

pub const MAP_URL_REQUIRED: &str = "Map URL is required";

/// Outcome of a coordinate lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateLookup {
    pub coordinates: Coordinates,
    /// True when the pair came from the store rather than a fresh resolution.
    pub from_cache: bool,
}

impl CoordinateLookup {
    fn cached(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            from_cache: true,
        }
    }

    fn fresh(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            from_cache: false,
        }
    }
}

/// Service answering coordinate requests from the cache, resolving and
/// persisting on a miss.
///
/// # Flow
///
/// 1. Reject a blank `map_url`
/// 2. Look up the URL in the store; a hit is returned immediately
/// 3. Resolve the URL (redirects + pattern extraction)
/// 4. Persist the pair and return it
///
/// # Concurrent writers
///
/// Two requests for the same unseen URL may both miss and both resolve. The
/// store's unique constraint lets only one insert succeed; the loser re-reads
/// the stored row and answers with it as a cache hit.
pub struct CoordinateService {
    repository: Arc<dyn CoordinateRepository>,
    resolver: Arc<dyn MapUrlResolver>,
}

impl CoordinateService {
    /// Creates a new coordinate service.
    pub fn new(repository: Arc<dyn CoordinateRepository>, resolver: Arc<dyn MapUrlResolver>) -> Self {
        Self {
            repository,
            resolver,
        }
    }

    /// Returns the coordinates for `map_url`, from cache when possible.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `map_url` is empty or blank; nothing
    /// else is touched in that case.
    ///
    /// Returns [`AppError::Resolve`] if resolution fails; nothing is stored.
    ///
    /// Returns [`AppError::Store`] if the lookup or the insert fails. A
    /// resolved pair is never returned without having been persisted.
    pub async fn get_coordinates(&self, map_url: &str) -> Result<CoordinateLookup, AppError> {
        if map_url.trim().is_empty() {
            return Err(AppError::bad_request(MAP_URL_REQUIRED));
        }

        if let Some(record) = self.repository.find_by_url(map_url).await? {
            debug!("Cache HIT: {}", map_url);
            return Ok(CoordinateLookup::cached(record.coordinates()));
        }

        debug!("Cache MISS: {}", map_url);

        let coordinates = self.resolver.resolve(map_url).await?;

        if !coordinates.is_within_bounds() {
            warn!(
                latitude = coordinates.latitude,
                longitude = coordinates.longitude,
                "Extracted coordinates out of range for {}",
                map_url
            );
        }

        match self
            .repository
            .create(NewCoordinate::new(map_url, coordinates))
            .await
        {
            Ok(id) => {
                info!(
                    id,
                    latitude = coordinates.latitude,
                    longitude = coordinates.longitude,
                    "Cached coordinates for {}",
                    map_url
                );
                Ok(CoordinateLookup::fresh(coordinates))
            }
            Err(AppError::Conflict { .. }) => {
                debug!("Lost insert race for {}, serving stored record", map_url);
                self.repository
                    .find_by_url(map_url)
                    .await?
                    .map(|record| CoordinateLookup::cached(record.coordinates()))
                    .ok_or_else(|| {
                        AppError::store(
                            "Database error",
                            json!({ "reason": "record missing after unique conflict", "map_url": map_url }),
                        )
                    })
            }
            Err(e) => Err(e),
        }
    }

    /// Returns true if the backing store answers queries.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }
}
