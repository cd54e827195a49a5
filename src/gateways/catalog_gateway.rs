// src/gateways/catalog_gateway.rs
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{FilterState, Genre, Movie, MovieSummary};
use crate::error::AppResult;

/// The canonical search request composed from free text, category shortcut
/// and facets. Produced by the SearchQueryComposer, consumed here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,

    pub filters: FilterState,

    /// Monotonic stamp; consumers discard responses whose request revision
    /// is older than the latest one issued.
    pub revision: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResults {
    pub movies: Vec<MovieSummary>,

    #[serde(rename = "totalResults")]
    pub total_results: u64,
}

/// Read-only movie catalog: discovery feeds, search, detail, genres.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn trending(&self) -> AppResult<Vec<MovieSummary>>;

    async fn recommended(&self) -> AppResult<Vec<MovieSummary>>;

    async fn new_releases(&self) -> AppResult<Vec<MovieSummary>>;

    async fn top_rated(&self) -> AppResult<Vec<MovieSummary>>;

    async fn search(&self, request: SearchRequest) -> AppResult<SearchResults>;

    async fn movie_by_id(&self, movie_id: &str) -> AppResult<Movie>;

    async fn genres(&self) -> AppResult<Vec<Genre>>;
}
