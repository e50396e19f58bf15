//! PostgreSQL implementation of the image repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Image;
use crate::domain::repositories::ImageRepository;
use crate::error::AppError;

pub struct PgImageRepository {
    pool: Arc<PgPool>,
}

impl PgImageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageRepository for PgImageRepository {
    async fn create(&self, file_name: &str) -> Result<Image, AppError> {
        let (id, file_name): (i64, String) = sqlx::query_as(
            "INSERT INTO ad_images (file_name) VALUES ($1) RETURNING id, file_name",
        )
        .bind(file_name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Image { id, file_name })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Image>, AppError> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, file_name FROM ad_images WHERE id = $1")
                .bind(id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(row.map(|(id, file_name)| Image { id, file_name }))
    }
}
