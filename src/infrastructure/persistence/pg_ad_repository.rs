//! PostgreSQL implementation of the ad repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Ad, AdPatch, Counter, NewAd};
use crate::domain::repositories::{AdRepository, AdSort};
use crate::error::AppError;

const AD_COLUMNS: &str = "id, slug, title, content, image_id, link, location_id, \
                          view_count, click_count, published, created_at";

#[derive(sqlx::FromRow)]
struct AdRow {
    id: i64,
    slug: String,
    title: String,
    content: String,
    image_id: Option<i64>,
    link: Option<String>,
    location_id: Option<i64>,
    view_count: i64,
    click_count: i64,
    published: bool,
    created_at: DateTime<Utc>,
}

impl From<AdRow> for Ad {
    fn from(row: AdRow) -> Self {
        Ad {
            id: row.id,
            slug: row.slug,
            title: row.title,
            content: row.content,
            image_id: row.image_id,
            link: row.link,
            location_id: row.location_id,
            view_count: row.view_count,
            click_count: row.click_count,
            published: row.published,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for ads.
///
/// Counter increments are single `UPDATE ... SET c = c + 1` statements, so
/// concurrent renders of the same ad never lose an increment.
pub struct PgAdRepository {
    pool: Arc<PgPool>,
}

impl PgAdRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdRepository for PgAdRepository {
    async fn create(&self, new_ad: NewAd) -> Result<Ad, AppError> {
        let row = sqlx::query_as::<_, AdRow>(&format!(
            r#"
            INSERT INTO ads (slug, title, content, image_id, link, location_id, published)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {AD_COLUMNS}
            "#
        ))
        .bind(new_ad.slug)
        .bind(new_ad.title)
        .bind(new_ad.content)
        .bind(new_ad.image_id)
        .bind(new_ad.link)
        .bind(new_ad.location_id)
        .bind(new_ad.published)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Ad>, AppError> {
        let row = sqlx::query_as::<_, AdRow>(&format!("SELECT {AD_COLUMNS} FROM ads WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Ad::from))
    }

    async fn list_published_for_location(&self, location_id: i64) -> Result<Vec<Ad>, AppError> {
        let rows = sqlx::query_as::<_, AdRow>(&format!(
            r#"
            SELECT {AD_COLUMNS}
            FROM ads
            WHERE location_id = $1 AND published
            ORDER BY id
            "#
        ))
        .bind(location_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Ad::from).collect())
    }

    async fn list(&self, sort: AdSort, offset: i64, limit: i64) -> Result<Vec<Ad>, AppError> {
        let order_by = match sort {
            AdSort::Created => "created_at DESC, id DESC",
            AdSort::Views => "view_count DESC, id DESC",
            AdSort::Clicks => "click_count DESC, id DESC",
        };

        let rows = sqlx::query_as::<_, AdRow>(&format!(
            "SELECT {AD_COLUMNS} FROM ads ORDER BY {order_by} LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Ad::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ads")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: AdPatch) -> Result<Ad, AppError> {
        let update_image = patch.image_id.is_some();
        let new_image = patch.image_id.flatten();
        let update_location = patch.location_id.is_some();
        let new_location = patch.location_id.flatten();

        let row = sqlx::query_as::<_, AdRow>(&format!(
            r#"
            UPDATE ads SET
                title       = COALESCE($2::TEXT, title),
                content     = COALESCE($3::TEXT, content),
                image_id    = CASE WHEN $4 THEN $5::BIGINT ELSE image_id END,
                link        = COALESCE($6::TEXT, link),
                location_id = CASE WHEN $7 THEN $8::BIGINT ELSE location_id END,
                published   = COALESCE($9::BOOLEAN, published)
            WHERE id = $1
            RETURNING {AD_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(update_image)
        .bind(new_image)
        .bind(patch.link)
        .bind(update_location)
        .bind(new_location)
        .bind(patch.published)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Ad::from)
            .ok_or_else(|| AppError::not_found("Ad not found", json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn increment(&self, id: i64, counter: Counter) -> Result<Option<i64>, AppError> {
        let column = counter.column();

        let value: Option<i64> = sqlx::query_scalar(&format!(
            "UPDATE ads SET {column} = {column} + 1 WHERE id = $1 RETURNING {column}"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(value)
    }
}
