//! PostgreSQL implementation of the location repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Location, LocationPatch, NewLocation};
use crate::domain::repositories::LocationRepository;
use crate::error::AppError;

const LOCATION_COLUMNS: &str = "id, slug, name, size_id, width, height, created_at";

#[derive(sqlx::FromRow)]
struct LocationRow {
    id: i64,
    slug: String,
    name: String,
    size_id: Option<String>,
    width: Option<String>,
    height: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            slug: row.slug,
            name: row.name,
            size_id: row.size_id,
            width: row.width,
            height: row.height,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for delivery locations.
pub struct PgLocationRepository {
    pool: Arc<PgPool>,
}

impl PgLocationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    async fn create(&self, new_location: NewLocation) -> Result<Location, AppError> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            r#"
            INSERT INTO locations (slug, name, size_id, width, height)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {LOCATION_COLUMNS}
            "#
        ))
        .bind(new_location.slug)
        .bind(new_location.name)
        .bind(new_location.size_id)
        .bind(new_location.width)
        .bind(new_location.height)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, AppError> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Location::from))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Location>, AppError> {
        let row = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Location::from))
    }

    async fn list(&self) -> Result<Vec<Location>, AppError> {
        let rows = sqlx::query_as::<_, LocationRow>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations ORDER BY name, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    async fn update(&self, id: i64, patch: LocationPatch) -> Result<Location, AppError> {
        let update_size = patch.size_id.is_some();
        let update_width = patch.width.is_some();
        let update_height = patch.height.is_some();

        let row = sqlx::query_as::<_, LocationRow>(&format!(
            r#"
            UPDATE locations SET
                name    = COALESCE($2::TEXT, name),
                size_id = CASE WHEN $3 THEN $4::TEXT ELSE size_id END,
                width   = CASE WHEN $5 THEN $6::TEXT ELSE width END,
                height  = CASE WHEN $7 THEN $8::TEXT ELSE height END
            WHERE id = $1
            RETURNING {LOCATION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(update_size)
        .bind(patch.size_id.flatten())
        .bind(update_width)
        .bind(patch.width.flatten())
        .bind(update_height)
        .bind(patch.height.flatten())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Location::from)
            .ok_or_else(|| AppError::not_found("Location not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
