//! Uniform random choice of one ad per location.

use std::sync::Arc;

use rand::Rng;

use crate::domain::entities::{Ad, Location};
use crate::domain::repositories::AdRepository;
use crate::error::AppError;

/// Picks one published ad assigned to a location.
///
/// Every eligible ad has the same probability of being chosen. Nothing is
/// remembered between calls, so the same ad may be picked twice in a row.
pub struct AdSelector<R: AdRepository> {
    repository: Arc<R>,
}

impl<R: AdRepository> AdSelector<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns `Ok(None)` when the location has no eligible ad.
    pub async fn select_for(&self, location: &Location) -> Result<Option<Ad>, AppError> {
        let mut candidates = self
            .repository
            .list_published_for_location(location.id)
            .await?;

        if candidates.is_empty() {
            return Ok(None);
        }

        let index = rand::rng().random_range(0..candidates.len());
        Ok(Some(candidates.swap_remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAdRepository;
    use chrono::Utc;
    use std::collections::HashMap;

    fn location(id: i64) -> Location {
        Location::new(id, "sidebar".to_string(), "Sidebar".to_string(), Utc::now())
    }

    fn ads(count: i64, location_id: i64) -> Vec<Ad> {
        (1..=count)
            .map(|id| {
                Ad::new(id, format!("ad-{id}"), format!("Ad {id}"), String::new(), Utc::now())
                    .at_location(location_id)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_no_eligible_ads() {
        let mut mock_repo = MockAdRepository::new();
        mock_repo
            .expect_list_published_for_location()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let selector = AdSelector::new(Arc::new(mock_repo));

        assert!(selector.select_for(&location(7)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_single_ad_always_chosen() {
        let mut mock_repo = MockAdRepository::new();
        mock_repo
            .expect_list_published_for_location()
            .returning(|_| Ok(ads(1, 3)));

        let selector = AdSelector::new(Arc::new(mock_repo));

        for _ in 0..20 {
            let ad = selector.select_for(&location(3)).await.unwrap().unwrap();
            assert_eq!(ad.id, 1);
        }
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut mock_repo = MockAdRepository::new();
        mock_repo
            .expect_list_published_for_location()
            .returning(|_| Err(AppError::internal("Database error", serde_json::json!({}))));

        let selector = AdSelector::new(Arc::new(mock_repo));

        assert!(selector.select_for(&location(1)).await.is_err());
    }

    #[tokio::test]
    async fn test_selection_is_uniform() {
        const ADS: i64 = 4;
        const DRAWS: usize = 8000;

        let mut mock_repo = MockAdRepository::new();
        mock_repo
            .expect_list_published_for_location()
            .returning(|_| Ok(ads(ADS, 1)));

        let selector = AdSelector::new(Arc::new(mock_repo));
        let mut counts: HashMap<i64, usize> = HashMap::new();

        for _ in 0..DRAWS {
            let ad = selector.select_for(&location(1)).await.unwrap().unwrap();
            *counts.entry(ad.id).or_default() += 1;
        }

        let expected = DRAWS as f64 / ADS as f64;
        let chi_square: f64 = (1..=ADS)
            .map(|id| {
                let observed = counts.get(&id).copied().unwrap_or(0) as f64;
                (observed - expected).powi(2) / expected
            })
            .sum();

        // 3 degrees of freedom; 21.1 is the 0.01% critical value.
        assert!(chi_square < 21.1, "chi-square {chi_square} with counts {counts:?}");
    }
}
