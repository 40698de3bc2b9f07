//! Coordinate lookup form.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Shortened link shown under the form as an example.
const EXAMPLE_URL: &str = "https://maps.app.goo.gl/vURqYiX57oEown6N6";

/// Template for the lookup page.
///
/// Renders `templates/index.html`. The form is submitted by
/// `static/app.js`, which posts to `/api/coordinates` and renders the
/// latitude/longitude (with a "From cache" note) or the error message.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub example_url: &'static str,
    pub version: &'static str,
}

/// Renders the lookup page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> impl IntoResponse {
    IndexTemplate {
        example_url: EXAMPLE_URL,
        version: env!("CARGO_PKG_VERSION"),
    }
}
