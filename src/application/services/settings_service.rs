//! Enabled ad sizes.

use std::sync::Arc;

use crate::domain::repositories::SettingsRepository;
use crate::domain::size_catalog::SizeCatalog;
use crate::error::AppError;
use serde_json::json;

/// Loads and edits the operator-enabled subset of the size catalog.
///
/// The server calls [`Self::load_catalog`] once at startup; edits made through
/// the `admin` CLI apply from the next start.
pub struct SettingsService<R: SettingsRepository> {
    repository: Arc<R>,
}

impl<R: SettingsRepository> SettingsService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Builds the catalog from stored settings, falling back to defaults.
    pub async fn load_catalog(&self) -> Result<SizeCatalog, AppError> {
        let catalog = match self.repository.enabled_sizes().await? {
            Some(sizes) => SizeCatalog::new(sizes),
            None => SizeCatalog::with_defaults(),
        };
        Ok(catalog)
    }

    /// Stores a new enabled set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the list is empty or names a size
    /// outside the standard catalog.
    pub async fn set_enabled_sizes(&self, sizes: Vec<String>) -> Result<SizeCatalog, AppError> {
        let sizes: Vec<String> = sizes.into_iter().map(|s| s.trim().to_string()).collect();

        if sizes.is_empty() {
            return Err(AppError::bad_request(
                "At least one size must be enabled",
                json!({}),
            ));
        }

        let unknown: Vec<&String> = sizes.iter().filter(|s| !SizeCatalog::is_known(s)).collect();
        if !unknown.is_empty() {
            return Err(AppError::bad_request(
                "Unknown ad sizes",
                json!({ "sizes": unknown }),
            ));
        }

        let catalog = SizeCatalog::new(&sizes);
        self.repository
            .set_enabled_sizes(catalog.enabled_sizes())
            .await?;
        Ok(catalog)
    }

    /// Forgets the stored set so the defaults apply.
    pub async fn reset(&self) -> Result<SizeCatalog, AppError> {
        self.repository.clear_enabled_sizes().await?;
        Ok(SizeCatalog::with_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockSettingsRepository;

    #[tokio::test]
    async fn test_load_defaults_when_unset() {
        let mut mock_repo = MockSettingsRepository::new();
        mock_repo.expect_enabled_sizes().returning(|| Ok(None));

        let service = SettingsService::new(Arc::new(mock_repo));
        let catalog = service.load_catalog().await.unwrap();

        assert_eq!(catalog.enabled_sizes(), &["300x250", "468x60", "728x90"]);
    }

    #[tokio::test]
    async fn test_load_stored_sizes() {
        let mut mock_repo = MockSettingsRepository::new();
        mock_repo
            .expect_enabled_sizes()
            .returning(|| Ok(Some(vec!["160x600".to_string(), "gone".to_string()])));

        let service = SettingsService::new(Arc::new(mock_repo));
        let catalog = service.load_catalog().await.unwrap();

        assert_eq!(catalog.enabled_sizes(), &["160x600"]);
    }

    #[tokio::test]
    async fn test_set_rejects_unknown() {
        let mut mock_repo = MockSettingsRepository::new();
        mock_repo.expect_set_enabled_sizes().never();

        let service = SettingsService::new(Arc::new(mock_repo));
        let result = service
            .set_enabled_sizes(vec!["300x250".to_string(), "1x1".to_string()])
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_set_stores_deduplicated() {
        let mut mock_repo = MockSettingsRepository::new();
        mock_repo
            .expect_set_enabled_sizes()
            .withf(|sizes| sizes == ["728x90".to_string(), "88x31".to_string()])
            .times(1)
            .returning(|_| Ok(()));

        let service = SettingsService::new(Arc::new(mock_repo));
        let catalog = service
            .set_enabled_sizes(vec![
                "728x90".to_string(),
                " 88x31".to_string(),
                "728x90".to_string(),
            ])
            .await
            .unwrap();

        assert_eq!(catalog.image_variants().len(), 2);
    }
}
