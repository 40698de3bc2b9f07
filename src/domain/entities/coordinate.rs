//! Coordinate entities: the resolved pair and its cached record.

use chrono::{DateTime, Utc};

/// A latitude/longitude pair extracted from a resolved map URL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true if both values fall inside the WGS84 ranges.
    ///
    /// The extractor does not reject out-of-range captures; callers use this
    /// for diagnostics only.
    pub fn is_within_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A cached coordinate pair keyed by the URL the caller submitted.
///
/// Records are append-only: created once on first successful resolution,
/// never updated or deleted.
#[derive(Debug, Clone)]
pub struct CoordinateRecord {
    pub id: i64,
    pub map_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}

impl CoordinateRecord {
    /// Creates a new CoordinateRecord instance.
    pub fn new(
        id: i64,
        map_url: String,
        latitude: f64,
        longitude: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            map_url,
            latitude,
            longitude,
            created_at,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Input data for caching a freshly resolved pair.
#[derive(Debug, Clone)]
pub struct NewCoordinate {
    pub map_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl NewCoordinate {
    pub fn new(map_url: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            map_url: map_url.into(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}
