//! Extraction of the `@<lat>,<lon>` segment from resolved map URLs.
//!
//! Canonical Google Maps URLs embed the viewport centre right after an `@`,
//! e.g. `https://www.google.com/maps/place/Googleplex/@37.422,-122.084,17z/data=...`.
//! Both numbers must carry a fractional part; an optional leading `-` is allowed.
//! Only ASCII digits count.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::Coordinates;

/// Compiled regex for the embedded-coordinate convention.
static COORDINATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(-?[0-9]+\.[0-9]+),(-?[0-9]+\.[0-9]+)").unwrap());

/// Extracts the first `@<lat>,<lon>` pair found in `url`.
///
/// Returns `None` when no segment matches. Values are not range-checked.
///
/// # Examples
///
/// ```ignore
/// let coords = extract_coordinates("https://www.google.com/maps/@37.422,-122.084,17z").unwrap();
/// assert_eq!(coords.latitude, 37.422);
/// assert_eq!(coords.longitude, -122.084);
/// ```
pub fn extract_coordinates(url: &str) -> Option<Coordinates> {
    let captures = COORDINATE_REGEX.captures(url)?;

    let latitude = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let longitude = captures.get(2)?.as_str().parse::<f64>().ok()?;

    Some(Coordinates::new(latitude, longitude))
}
