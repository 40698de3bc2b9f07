mod common;

use std::time::Duration;
use map_coordinates::domain::entities::Coordinates;
use map_coordinates::domain::resolver::{MapUrlResolver, ResolveError};
use map_coordinates::infrastructure::resolver::{HttpResolver, ResolverSettings};

fn resolver() -> HttpResolver {
    HttpResolver::new(&ResolverSettings {
        timeout: Duration::from_secs(5),
        max_redirects: 5,
        user_agent: "map-coordinates-test".to_string(),
    })
    .unwrap()
}

#[tokio::test]
async fn test_follows_redirect_to_coordinates() {
    let addr = common::spawn_maps_server().await;

    let coords = resolver()
        .resolve(&format!("http://{addr}/short"))
        .await
        .unwrap();

    assert_eq!(coords, Coordinates::new(37.422, -122.084));
}

#[tokio::test]
async fn test_follows_short_redirect_chain() {
    let addr = common::spawn_maps_server().await;

    let coords = resolver()
        .resolve(&format!("http://{addr}/chain/2"))
        .await
        .unwrap();

    assert_eq!(coords, Coordinates::new(-33.8568, 151.2153));
}

#[tokio::test]
async fn test_url_without_redirect_is_matched_as_is() {
    let addr = common::spawn_maps_server().await;

    let coords = resolver()
        .resolve(&format!("http://{addr}/maps/@51.5007,-0.1246,17z"))
        .await
        .unwrap();

    assert_eq!(coords, Coordinates::new(51.5007, -0.1246));
}

#[tokio::test]
async fn test_non_success_status_still_uses_final_url() {
    let addr = common::spawn_maps_server().await;

    let coords = resolver()
        .resolve(&format!("http://{addr}/missing"))
        .await
        .unwrap();

    assert_eq!(coords, Coordinates::new(48.8584, 2.2945));
}

#[tokio::test]
async fn test_final_url_without_coordinates_is_extraction_error() {
    let addr = common::spawn_maps_server().await;

    let err = resolver()
        .resolve(&format!("http://{addr}/search"))
        .await
        .unwrap_err();

    match err {
        ResolveError::Extraction { resolved_url } => {
            assert!(resolved_url.ends_with("/search-results?q=coffee"));
        }
        other => panic!("expected extraction error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_redirect_loop_is_network_error() {
    let addr = common::spawn_maps_server().await;

    let err = resolver()
        .resolve(&format!("http://{addr}/loop"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Network(_)));
}

#[tokio::test]
async fn test_redirect_cap_is_enforced() {
    let addr = common::spawn_maps_server().await;

    let err = resolver()
        .resolve(&format!("http://{addr}/chain/20"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Network(_)));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let addr = common::closed_port_addr().await;

    let err = resolver()
        .resolve(&format!("http://{addr}/short"))
        .await
        .unwrap_err();

    assert!(matches!(err, ResolveError::Network(_)));
    assert!(err.to_string().starts_with("Failed to extract coordinates:"));
}
