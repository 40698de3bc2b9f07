//! API route configuration.

use crate::api::handlers::coordinates_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /coordinates` - Resolve a map URL (cached)
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/coordinates", post(coordinates_handler))
}
