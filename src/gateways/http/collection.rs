// src/gateways/http/collection.rs
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use super::client::{ApiClient, StatusResponse};
use crate::domain::{MovieSummary, Profile, ProfileUpdate, Rating, Watchlist};
use crate::error::{AppError, AppResult};
use crate::gateways::collection_gateway::CollectionGateway;

#[derive(Debug, Deserialize)]
struct ProfileEnvelope {
    user: Profile,
}

#[derive(Debug, Deserialize)]
struct ProfileUpdatedEnvelope {
    success: bool,
    #[serde(default)]
    message: String,
    user: Option<Profile>,
}

#[derive(Debug, Deserialize)]
struct FavoritesEnvelope {
    favorites: Vec<MovieSummary>,
}

#[derive(Debug, Deserialize)]
struct WatchlistsEnvelope {
    watchlists: Vec<Watchlist>,
}

#[derive(Debug, Deserialize)]
struct WatchlistCreatedEnvelope {
    success: bool,
    #[serde(default)]
    message: String,
    watchlist: Option<Watchlist>,
}

#[derive(Debug, Deserialize)]
struct RatingsEnvelope {
    ratings: Vec<Rating>,
}

pub struct HttpCollectionGateway {
    api: ApiClient,
}

impl HttpCollectionGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn status_call(&self, request: reqwest::RequestBuilder) -> AppResult<()> {
        let response: StatusResponse = self.api.execute(request).await?;
        response.into_result()?;
        Ok(())
    }
}

#[async_trait]
impl CollectionGateway for HttpCollectionGateway {
    async fn profile(&self) -> AppResult<Profile> {
        let request = self.api.request(Method::GET, "/api/user/profile");
        let envelope: ProfileEnvelope = self.api.execute(request).await?;
        Ok(envelope.user)
    }

    async fn update_profile(&self, update: ProfileUpdate) -> AppResult<Profile> {
        let request = self
            .api
            .request(Method::PUT, "/api/user/profile")
            .json(&update);
        let envelope: ProfileUpdatedEnvelope = self.api.execute(request).await?;
        if !envelope.success {
            return Err(AppError::Remote(envelope.message));
        }
        envelope
            .user
            .ok_or_else(|| AppError::Remote("Update response carried no profile".to_string()))
    }

    async fn favorites(&self) -> AppResult<Vec<MovieSummary>> {
        let request = self.api.request(Method::GET, "/api/user/favorites");
        let envelope: FavoritesEnvelope = self.api.execute(request).await?;
        Ok(envelope.favorites)
    }

    async fn add_favorite(&self, movie_id: &str) -> AppResult<()> {
        let request = self
            .api
            .request(Method::POST, "/api/user/favorites")
            .json(&json!({ "movieId": movie_id }));
        self.status_call(request).await
    }

    async fn remove_favorite(&self, movie_id: &str) -> AppResult<()> {
        let request = self
            .api
            .request(Method::DELETE, &format!("/api/user/favorites/{}", movie_id));
        self.status_call(request).await
    }

    async fn watchlists(&self) -> AppResult<Vec<Watchlist>> {
        let request = self.api.request(Method::GET, "/api/user/watchlists");
        let envelope: WatchlistsEnvelope = self.api.execute(request).await?;
        Ok(envelope.watchlists)
    }

    async fn create_watchlist(
        &self,
        name: String,
        description: Option<String>,
    ) -> AppResult<Watchlist> {
        let request = self
            .api
            .request(Method::POST, "/api/user/watchlists")
            .json(&json!({ "name": name, "description": description }));
        let envelope: WatchlistCreatedEnvelope = self.api.execute(request).await?;
        if !envelope.success {
            return Err(AppError::Remote(envelope.message));
        }
        envelope
            .watchlist
            .ok_or_else(|| AppError::Remote("Create response carried no watchlist".to_string()))
    }

    async fn add_to_watchlist(&self, watchlist_id: &str, movie_id: &str) -> AppResult<()> {
        let request = self
            .api
            .request(
                Method::POST,
                &format!("/api/user/watchlists/{}/movies", watchlist_id),
            )
            .json(&json!({ "movieId": movie_id }));
        self.status_call(request).await
    }

    async fn remove_from_watchlist(&self, watchlist_id: &str, movie_id: &str) -> AppResult<()> {
        let request = self.api.request(
            Method::DELETE,
            &format!("/api/user/watchlists/{}/movies/{}", watchlist_id, movie_id),
        );
        self.status_call(request).await
    }

    async fn rate_movie(
        &self,
        movie_id: &str,
        value: u8,
        review: Option<String>,
    ) -> AppResult<()> {
        let request = self
            .api
            .request(Method::POST, "/api/user/ratings")
            .json(&json!({ "movieId": movie_id, "rating": value, "review": review }));
        self.status_call(request).await
    }

    async fn ratings(&self) -> AppResult<Vec<Rating>> {
        let request = self.api.request(Method::GET, "/api/user/ratings");
        let envelope: RatingsEnvelope = self.api.execute(request).await?;
        Ok(envelope.ratings)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{validate_watchlist, Watchlist};

    // Boundary schema check: the wire shape (`_id` / `movies` /
    // `movieDetails`) must land in the lock-step domain shape.
    #[test]
    fn test_watchlist_wire_format_parses_lock_step() {
        let body = r#"{
            "_id": "watchlist1",
            "name": "Must Watch",
            "description": "Movies I absolutely need to watch",
            "movies": ["1", "3"],
            "movieDetails": [
                {
                    "_id": "1",
                    "title": "Avatar: The Way of Water",
                    "poster_path": "/t6HIqrRAclMCA60NsSmeqe9RmNV.jpg",
                    "vote_average": 7.6,
                    "release_date": "2022-12-14"
                },
                {
                    "_id": "3",
                    "title": "Top Gun: Maverick",
                    "poster_path": "/62HCnUTziyWcpDaBO2i1DX17ljH.jpg",
                    "vote_average": 8.3,
                    "release_date": "2022-05-24"
                }
            ],
            "createdAt": "2024-01-20T14:30:00Z",
            "updatedAt": "2024-01-22T16:45:00Z"
        }"#;

        let watchlist: Watchlist = serde_json::from_str(body).unwrap();
        assert_eq!(watchlist.id, "watchlist1");
        assert_eq!(watchlist.movie_ids, vec!["1", "3"]);
        assert_eq!(watchlist.movies.len(), 2);
        assert!(validate_watchlist(&watchlist).is_ok());
    }

    // Shape mismatch fails closed instead of defaulting.
    #[test]
    fn test_malformed_watchlist_is_rejected() {
        let body = r#"{ "_id": "watchlist1", "movies": ["1"] }"#;
        assert!(serde_json::from_str::<Watchlist>(body).is_err());
    }
}
