//! Repository trait for uploaded banner images.

use crate::domain::entities::Image;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Registers an uploaded file.
    async fn create(&self, file_name: &str) -> Result<Image, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Image>, AppError>;
}
