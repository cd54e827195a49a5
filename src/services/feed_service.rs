// src/services/feed_service.rs
use std::sync::Arc;

use log::debug;

use crate::domain::MovieSummary;
use crate::error::AppResult;
use crate::gateways::CatalogGateway;

/// The four discovery feeds of the home view, exposed only once all of them
/// have loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeFeeds {
    pub trending: Vec<MovieSummary>,
    pub recommended: Vec<MovieSummary>,
    pub new_releases: Vec<MovieSummary>,
    pub top_rated: Vec<MovieSummary>,
}

/// Fetches the independent discovery feeds concurrently and assembles them
/// for display.
pub struct FeedAggregator {
    catalog: Arc<dyn CatalogGateway>,
}

impl FeedAggregator {
    pub fn new(catalog: Arc<dyn CatalogGateway>) -> Self {
        Self { catalog }
    }

    /// Load all four feeds with fail-fast join semantics: if any one fetch
    /// fails the aggregate fails, and no partial results are exposed even
    /// when the other feeds already succeeded.
    pub async fn load_home(&self) -> AppResult<HomeFeeds> {
        let (trending, recommended, new_releases, top_rated) = tokio::try_join!(
            self.catalog.trending(),
            self.catalog.recommended(),
            self.catalog.new_releases(),
            self.catalog.top_rated(),
        )?;

        debug!(
            "home feeds loaded: {} trending, {} recommended, {} new, {} top",
            trending.len(),
            recommended.len(),
            new_releases.len(),
            top_rated.len()
        );

        Ok(HomeFeeds {
            trending,
            recommended,
            new_releases,
            top_rated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::gateways::MockCatalogGateway;

    fn summary(id: &str) -> MovieSummary {
        MovieSummary {
            id: id.to_string(),
            title: format!("Movie {}", id),
            poster_path: "/poster.jpg".to_string(),
            release_date: "2022-01-01".to_string(),
            vote_average: 7.0,
        }
    }

    #[tokio::test]
    async fn test_all_feeds_succeed() {
        let mut catalog = MockCatalogGateway::new();
        catalog
            .expect_trending()
            .returning(|| Ok(vec![summary("t1")]));
        catalog
            .expect_recommended()
            .returning(|| Ok(vec![summary("r1"), summary("r2")]));
        catalog.expect_new_releases().returning(|| Ok(vec![]));
        catalog
            .expect_top_rated()
            .returning(|| Ok(vec![summary("x1")]));

        let aggregator = FeedAggregator::new(Arc::new(catalog));
        let feeds = aggregator.load_home().await.unwrap();

        assert_eq!(feeds.trending.len(), 1);
        assert_eq!(feeds.recommended.len(), 2);
        assert!(feeds.new_releases.is_empty());
        assert_eq!(feeds.top_rated.len(), 1);
    }

    #[tokio::test]
    async fn test_single_failure_fails_the_aggregate() {
        let mut catalog = MockCatalogGateway::new();
        catalog
            .expect_trending()
            .returning(|| Err(AppError::Remote("trending feed unavailable".to_string())));
        catalog
            .expect_recommended()
            .returning(|| Ok(vec![summary("r1")]));
        catalog
            .expect_new_releases()
            .returning(|| Ok(vec![summary("n1")]));
        catalog
            .expect_top_rated()
            .returning(|| Ok(vec![summary("x1")]));

        let aggregator = FeedAggregator::new(Arc::new(catalog));
        let result = aggregator.load_home().await;

        // No partial results: the aggregate is an error, full stop.
        assert!(matches!(result, Err(AppError::Remote(_))));
    }
}
