//! DTOs for the coordinate lookup endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CoordinateLookup;
use crate::error::AppError;

/// Request to resolve a map URL.
///
/// `mapUrl` is optional at the serde level so that a missing field produces
/// the same 400 as an empty one.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesRequest {
    #[validate(
        required(message = "Map URL is required"),
        length(min = 1, message = "Map URL is required")
    )]
    pub map_url: Option<String>,
}

impl CoordinatesRequest {
    /// Parses a raw request body.
    ///
    /// An empty body is a request without `mapUrl`. Anything else must be a
    /// JSON object; the content type is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the body is not a valid request.
    pub fn from_json_body(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self { map_url: None });
        }

        serde_json::from_slice(body)
            .map_err(|e| AppError::bad_request(format!("Invalid request body: {e}")))
    }

    /// Submitted URL, empty when absent.
    pub fn map_url(&self) -> &str {
        self.map_url.as_deref().unwrap_or_default()
    }
}

/// Coordinates returned for a map URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub from_cache: bool,
}

impl From<CoordinateLookup> for CoordinatesResponse {
    fn from(lookup: CoordinateLookup) -> Self {
        Self {
            latitude: lookup.coordinates.latitude,
            longitude: lookup.coordinates.longitude,
            from_cache: lookup.from_cache,
        }
    }
}
