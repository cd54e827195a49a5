// src/gateways/collection_gateway.rs
use async_trait::async_trait;

use crate::domain::{MovieSummary, Profile, ProfileUpdate, Rating, Watchlist};
use crate::error::AppResult;

/// Remote store of the user-owned collections: profile, favorites,
/// watchlists and ratings. Mutations resolve to a success/message envelope;
/// a non-success outcome surfaces as `AppError::Remote` carrying the
/// server's message.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionGateway: Send + Sync {
    async fn profile(&self) -> AppResult<Profile>;

    async fn update_profile(&self, update: ProfileUpdate) -> AppResult<Profile>;

    async fn favorites(&self) -> AppResult<Vec<MovieSummary>>;

    async fn add_favorite(&self, movie_id: &str) -> AppResult<()>;

    async fn remove_favorite(&self, movie_id: &str) -> AppResult<()>;

    async fn watchlists(&self) -> AppResult<Vec<Watchlist>>;

    /// Creates an empty watchlist; the id is server-assigned.
    async fn create_watchlist(
        &self,
        name: String,
        description: Option<String>,
    ) -> AppResult<Watchlist>;

    async fn add_to_watchlist(&self, watchlist_id: &str, movie_id: &str) -> AppResult<()>;

    async fn remove_from_watchlist(&self, watchlist_id: &str, movie_id: &str) -> AppResult<()>;

    async fn rate_movie(&self, movie_id: &str, value: u8, review: Option<String>)
        -> AppResult<()>;

    async fn ratings(&self) -> AppResult<Vec<Rating>>;
}
