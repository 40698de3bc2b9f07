//! Handler for the coordinate lookup endpoint.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::coordinates::{CoordinatesRequest, CoordinatesResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the coordinates embedded in a Google Maps link.
///
/// # Endpoint
///
/// `POST /api/coordinates`
///
/// # Request Body
///
/// ```json
/// { "mapUrl": "https://maps.app.goo.gl/vURqYiX57oEown6N6" }
/// ```
///
/// # Response
///
/// ```json
/// { "latitude": 37.422, "longitude": -122.084, "fromCache": false }
/// ```
///
/// `fromCache` is true when the URL had already been resolved before.
///
/// # Errors
///
/// - 400 `Map URL is required` when `mapUrl` is missing or empty (including an
///   empty body)
/// - 400 `Invalid request body: ...` when the body is not a JSON object with a
///   string `mapUrl`
/// - 500 when the link cannot be fetched, carries no `@lat,lon` segment,
///   or the result cannot be stored
pub async fn coordinates_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CoordinatesResponse>, AppError> {
    let payload = CoordinatesRequest::from_json_body(&body)?;
    payload.validate()?;

    let lookup = state
        .coordinate_service
        .get_coordinates(payload.map_url())
        .await?;

    Ok(Json(lookup.into()))
}
