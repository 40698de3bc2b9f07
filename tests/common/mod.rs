#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect};
use axum::routing::get;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;
use map_coordinates::application::services::CoordinateService;
use map_coordinates::domain::entities::{CoordinateRecord, Coordinates, NewCoordinate};
use map_coordinates::domain::repositories::CoordinateRepository;
use map_coordinates::domain::resolver::{MapUrlResolver, ResolveError};
use map_coordinates::error::AppError;
use map_coordinates::state::AppState;

pub const SHORT_URL: &str = "https://maps.app.goo.gl/vURqYiX57oEown6N6";
pub const SEARCH_URL: &str = "https://maps.app.goo.gl/search-only";
pub const UNREACHABLE_URL: &str = "https://unreachable.invalid/x";

/// In-memory coordinate store enforcing the same `map_url` uniqueness as the
/// PostgreSQL table.
#[derive(Default)]
pub struct InMemoryCoordinateRepository {
    records: Mutex<HashMap<String, CoordinateRecord>>,
    next_id: AtomicUsize,
    pub lookups: AtomicUsize,
    pub inserts: AtomicUsize,
    pub fail_inserts: bool,
    pub unhealthy: bool,
}

impl InMemoryCoordinateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_inserts() -> Self {
        Self {
            fail_inserts: true,
            ..Self::default()
        }
    }

    pub fn unhealthy() -> Self {
        Self {
            unhealthy: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn seed(&self, map_url: &str, latitude: f64, longitude: f64) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        self.records.lock().unwrap().insert(
            map_url.to_string(),
            CoordinateRecord::new(id, map_url.to_string(), latitude, longitude, Utc::now()),
        );
    }
}

#[async_trait]
impl CoordinateRepository for InMemoryCoordinateRepository {
    async fn find_by_url(&self, map_url: &str) -> Result<Option<CoordinateRecord>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.lock().unwrap().get(map_url).cloned())
    }

    async fn create(&self, new_coordinate: NewCoordinate) -> Result<i64, AppError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);

        if self.fail_inserts {
            return Err(AppError::store(
                "Database error",
                json!({ "reason": "connection reset" }),
            ));
        }

        let mut records = self.records.lock().unwrap();
        if records.contains_key(&new_coordinate.map_url) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "coordinates_map_url_md5_key" }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        records.insert(
            new_coordinate.map_url.clone(),
            CoordinateRecord::new(
                id,
                new_coordinate.map_url,
                new_coordinate.latitude,
                new_coordinate.longitude,
                Utc::now(),
            ),
        );

        Ok(id)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<CoordinateRecord>, AppError> {
        let mut records: Vec<_> = self.records.lock().unwrap().values().cloned().collect();
        records.sort_by(|a, b| b.id.cmp(&a.id));
        records.truncate(limit.max(0) as usize);
        Ok(records)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.records.lock().unwrap().len() as i64)
    }

    async fn health_check(&self) -> bool {
        !self.unhealthy
    }
}

/// Resolver answering from a fixed table instead of the network.
///
/// - [`SHORT_URL`] → `37.422, -122.084`
/// - [`SEARCH_URL`] → extraction failure
/// - anything else → network failure
///
/// A gated resolver holds every call until `n` callers are resolving at once.
#[derive(Default)]
pub struct StubResolver {
    pub calls: AtomicUsize,
    gate: Option<Barrier>,
}

impl StubResolver {
    pub fn gated(n: usize) -> Self {
        Self {
            gate: Some(Barrier::new(n)),
            ..Self::default()
        }
    }
}

#[async_trait]
impl MapUrlResolver for StubResolver {
    async fn resolve(&self, map_url: &str) -> Result<Coordinates, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.wait().await;
        }

        match map_url {
            SHORT_URL => Ok(Coordinates::new(37.422, -122.084)),
            SEARCH_URL => Err(ResolveError::Extraction {
                resolved_url: "https://www.google.com/search?q=coffee".to_string(),
            }),
            _ => Err(ResolveError::Network(
                "connection failed: dns error".to_string(),
            )),
        }
    }
}

pub fn create_test_state(
    repository: Arc<dyn CoordinateRepository>,
    resolver: Arc<dyn MapUrlResolver>,
) -> AppState {
    AppState::new(Arc::new(CoordinateService::new(repository, resolver)))
}

/// Starts a local stand-in for the Google Maps redirect chain.
///
/// - `/short` → 302 → `/maps/place/Googleplex/@37.422,-122.084,17z/data=!3m1`
/// - `/chain/{n}` → redirects `n` times, then lands on `/maps/@-33.8568,151.2153,15z`
/// - `/loop` → redirects to itself forever
/// - `/search` → 302 → `/search-results?q=coffee` (no coordinates)
/// - `/missing` → 404 on `/maps/@48.8584,2.2945,17z` (status is ignored)
///
/// Every other path answers 200.
pub async fn spawn_maps_server() -> SocketAddr {
    let app = Router::new()
        .route(
            "/short",
            get(|| async {
                Redirect::temporary("/maps/place/Googleplex/@37.422,-122.084,17z/data=!3m1")
            }),
        )
        .route(
            "/chain/{n}",
            get(|Path(n): Path<u32>| async move {
                if n == 0 {
                    Redirect::temporary("/maps/@-33.8568,151.2153,15z")
                } else {
                    Redirect::temporary(&format!("/chain/{}", n - 1))
                }
            }),
        )
        .route("/loop", get(|| async { Redirect::temporary("/loop") }))
        .route(
            "/search",
            get(|| async { Redirect::temporary("/search-results?q=coffee") }),
        )
        .route(
            "/missing",
            get(|| async { Redirect::temporary("/gone/@48.8584,2.2945,17z") }),
        )
        .route(
            "/gone/{*rest}",
            get(|| async { (StatusCode::NOT_FOUND, "not here").into_response() }),
        )
        .fallback(|| async { "ok" });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Returns an address nothing is listening on.
pub async fn closed_port_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
