//! View and click counters.

use std::sync::Arc;

use crate::domain::entities::Counter;
use crate::domain::repositories::AdRepository;
use crate::error::AppError;

/// Result of a click report, sent back to the browser as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Success,
    Error,
}

impl ClickOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            ClickOutcome::Success => "success",
            ClickOutcome::Error => "error",
        }
    }
}

/// Increments ad counters through the repository's atomic update.
pub struct CounterService<R: AdRepository> {
    repository: Arc<R>,
}

impl<R: AdRepository> CounterService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Adds one view. Returns the new count, or `None` if the ad is gone.
    pub async fn increment_view(&self, ad_id: i64) -> Result<Option<i64>, AppError> {
        self.repository.increment(ad_id, Counter::Views).await
    }

    /// Records a click reported by the browser.
    ///
    /// The raw `ad_id` must parse as a positive integer; anything else fails
    /// without touching the database.
    pub async fn increment_click(&self, raw_ad_id: Option<&str>) -> ClickOutcome {
        let Some(ad_id) = raw_ad_id.and_then(parse_ad_id) else {
            tracing::debug!(raw_ad_id = ?raw_ad_id, "rejected click with invalid ad id");
            return ClickOutcome::Error;
        };

        match self.repository.increment(ad_id, Counter::Clicks).await {
            Ok(Some(clicks)) => {
                tracing::debug!(ad_id, clicks, "click recorded");
                ClickOutcome::Success
            }
            Ok(None) => {
                tracing::debug!(ad_id, "click for unknown ad");
                ClickOutcome::Error
            }
            Err(e) => {
                tracing::error!(error = %e, ad_id, "failed to record click");
                ClickOutcome::Error
            }
        }
    }
}

/// Parses a browser-supplied ad id; only positive integers are accepted.
pub fn parse_ad_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAdRepository;
    use serde_json::json;

    #[test]
    fn test_parse_ad_id() {
        assert_eq!(parse_ad_id("42"), Some(42));
        assert_eq!(parse_ad_id(" 7 "), Some(7));
        assert_eq!(parse_ad_id("0"), None);
        assert_eq!(parse_ad_id("-3"), None);
        assert_eq!(parse_ad_id("abc"), None);
        assert_eq!(parse_ad_id("4.5"), None);
        assert_eq!(parse_ad_id(""), None);
    }

    #[test]
    fn test_outcome_tokens() {
        assert_eq!(ClickOutcome::Success.as_str(), "success");
        assert_eq!(ClickOutcome::Error.as_str(), "error");
    }

    #[tokio::test]
    async fn test_click_success() {
        let mut mock_repo = MockAdRepository::new();
        mock_repo
            .expect_increment()
            .withf(|id, counter| *id == 42 && *counter == Counter::Clicks)
            .times(1)
            .returning(|_, _| Ok(Some(1)));

        let service = CounterService::new(Arc::new(mock_repo));

        assert_eq!(service.increment_click(Some("42")).await, ClickOutcome::Success);
    }

    #[tokio::test]
    async fn test_invalid_click_does_not_write() {
        let mut mock_repo = MockAdRepository::new();
        mock_repo.expect_increment().never();

        let service = CounterService::new(Arc::new(mock_repo));

        assert_eq!(service.increment_click(None).await, ClickOutcome::Error);
        assert_eq!(service.increment_click(Some("abc")).await, ClickOutcome::Error);
        assert_eq!(service.increment_click(Some("0")).await, ClickOutcome::Error);
    }

    #[tokio::test]
    async fn test_click_on_missing_ad_or_db_failure() {
        let mut mock_repo = MockAdRepository::new();
        mock_repo
            .expect_increment()
            .withf(|id, _| *id == 1)
            .returning(|_, _| Ok(None));
        mock_repo
            .expect_increment()
            .withf(|id, _| *id == 2)
            .returning(|_, _| Err(AppError::internal("Database error", json!({}))));

        let service = CounterService::new(Arc::new(mock_repo));

        assert_eq!(service.increment_click(Some("1")).await, ClickOutcome::Error);
        assert_eq!(service.increment_click(Some("2")).await, ClickOutcome::Error);
    }

    #[tokio::test]
    async fn test_increment_view_uses_view_counter() {
        let mut mock_repo = MockAdRepository::new();
        mock_repo
            .expect_increment()
            .withf(|id, counter| *id == 5 && *counter == Counter::Views)
            .times(1)
            .returning(|_, _| Ok(Some(11)));

        let service = CounterService::new(Arc::new(mock_repo));

        assert_eq!(service.increment_view(5).await.unwrap(), Some(11));
    }
}
