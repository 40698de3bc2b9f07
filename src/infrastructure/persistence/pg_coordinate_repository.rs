//! PostgreSQL implementation of the coordinate cache.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{CoordinateRecord, NewCoordinate};
use crate::domain::repositories::CoordinateRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct CoordinateRow {
    id: i64,
    map_url: String,
    latitude: f64,
    longitude: f64,
    created_at: DateTime<Utc>,
}

impl From<CoordinateRow> for CoordinateRecord {
    fn from(r: CoordinateRow) -> Self {
        CoordinateRecord::new(r.id, r.map_url, r.latitude, r.longitude, r.created_at)
    }
}

/// PostgreSQL repository for cached coordinates.
///
/// Relies on the `coordinates_map_url_md5_key` unique index: a second insert
/// for the same URL fails with [`AppError::Conflict`] instead of duplicating the row.
/// The index is on `md5(map_url)`, so URLs of any length can be stored.
pub struct PgCoordinateRepository {
    pool: Arc<PgPool>,
}

impl PgCoordinateRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CoordinateRepository for PgCoordinateRepository {
    async fn find_by_url(&self, map_url: &str) -> Result<Option<CoordinateRecord>, AppError> {
        let row = sqlx::query_as::<_, CoordinateRow>(
            r#"
            SELECT id, map_url, latitude, longitude, created_at
            FROM coordinates
            WHERE md5(map_url) = md5($1) AND map_url = $1
            LIMIT 1
            "#,
        )
        .bind(map_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(CoordinateRecord::from))
    }

    async fn create(&self, new_coordinate: NewCoordinate) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO coordinates (map_url, latitude, longitude)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&new_coordinate.map_url)
        .bind(new_coordinate.latitude)
        .bind(new_coordinate.longitude)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<CoordinateRecord>, AppError> {
        let rows = sqlx::query_as::<_, CoordinateRow>(
            r#"
            SELECT id, map_url, latitude, longitude, created_at
            FROM coordinates
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CoordinateRecord::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM coordinates")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
