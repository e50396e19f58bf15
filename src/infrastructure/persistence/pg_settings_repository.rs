//! PostgreSQL implementation of the settings repository.
//!
//! Settings are stored as JSONB values keyed by name in the `settings` table.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::repositories::{AD_SIZES_KEY, SettingsRepository};
use crate::error::AppError;

pub struct PgSettingsRepository {
    pool: Arc<PgPool>,
}

impl PgSettingsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PgSettingsRepository {
    async fn enabled_sizes(&self) -> Result<Option<Vec<String>>, AppError> {
        let value: Option<Json<Vec<String>>> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
                .bind(AD_SIZES_KEY)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(value.map(|Json(sizes)| sizes))
    }

    async fn set_enabled_sizes(&self, sizes: &[String]) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()
            "#,
        )
        .bind(AD_SIZES_KEY)
        .bind(Json(sizes))
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn clear_enabled_sizes(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM settings WHERE key = $1")
            .bind(AD_SIZES_KEY)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
