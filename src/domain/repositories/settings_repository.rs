//! Repository trait for persisted operator settings.

use crate::error::AppError;
use async_trait::async_trait;

/// Settings key holding the enabled ad sizes.
pub const AD_SIZES_KEY: &str = "ad_sizes";

/// Repository interface for operator settings.
///
/// Values are read once at startup; the running service never re-reads them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Returns the stored enabled sizes, or `None` when never configured.
    async fn enabled_sizes(&self) -> Result<Option<Vec<String>>, AppError>;

    /// Replaces the stored enabled sizes.
    async fn set_enabled_sizes(&self, sizes: &[String]) -> Result<(), AppError>;

    /// Removes the stored sizes so that defaults apply again.
    async fn clear_enabled_sizes(&self) -> Result<(), AppError>;
}
