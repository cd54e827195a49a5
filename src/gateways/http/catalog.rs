// src/gateways/http/catalog.rs
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use reqwest::Method;
use serde::Deserialize;

use super::client::ApiClient;
use crate::domain::{Genre, Movie, MovieSummary};
use crate::error::AppResult;
use crate::gateways::catalog_gateway::{CatalogGateway, SearchRequest, SearchResults};

#[derive(Debug, Deserialize)]
struct MoviesEnvelope {
    movies: Vec<MovieSummary>,
}

#[derive(Debug, Deserialize)]
struct MovieEnvelope {
    movie: Movie,
}

#[derive(Debug, Deserialize)]
struct GenresEnvelope {
    genres: Vec<Genre>,
}

/// Build the search query string: inactive facets stay off the wire, and
/// only the upper year bound is part of the remote contract.
fn search_params(request: &SearchRequest, current_year: i32) -> Vec<(&'static str, String)> {
    let mut params = vec![("q", request.query.clone())];

    let filters = &request.filters;
    if !filters.genres.is_empty() {
        let joined = filters.genres.iter().cloned().collect::<Vec<_>>().join(",");
        params.push(("genre", joined));
    }
    if filters.year_max < current_year {
        params.push(("year", filters.year_max.to_string()));
    }
    if filters.rating_min > 0.0 {
        params.push(("rating", filters.rating_min.to_string()));
    }
    if let Some(category) = &filters.category {
        params.push(("category", category.clone()));
    }
    params
}

pub struct HttpCatalogGateway {
    api: ApiClient,
}

impl HttpCatalogGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn feed(&self, path: &str) -> AppResult<Vec<MovieSummary>> {
        let request = self.api.request(Method::GET, path);
        let envelope: MoviesEnvelope = self.api.execute(request).await?;
        Ok(envelope.movies)
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn trending(&self) -> AppResult<Vec<MovieSummary>> {
        self.feed("/api/movies/trending").await
    }

    async fn recommended(&self) -> AppResult<Vec<MovieSummary>> {
        self.feed("/api/movies/recommended").await
    }

    async fn new_releases(&self) -> AppResult<Vec<MovieSummary>> {
        self.feed("/api/movies/new-releases").await
    }

    async fn top_rated(&self) -> AppResult<Vec<MovieSummary>> {
        self.feed("/api/movies/top-rated").await
    }

    async fn search(&self, request: SearchRequest) -> AppResult<SearchResults> {
        let params = search_params(&request, Utc::now().year());

        let http_request = self
            .api
            .request(Method::GET, "/api/movies/search")
            .query(&params);
        self.api.execute(http_request).await
    }

    async fn movie_by_id(&self, movie_id: &str) -> AppResult<Movie> {
        let request = self
            .api
            .request(Method::GET, &format!("/api/movies/{}", movie_id));
        let envelope: MovieEnvelope = self.api.execute(request).await?;
        Ok(envelope.movie)
    }

    async fn genres(&self) -> AppResult<Vec<Genre>> {
        let request = self.api.request(Method::GET, "/api/movies/genres");
        let envelope: GenresEnvelope = self.api.execute(request).await?;
        Ok(envelope.genres)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterState;

    const YEAR: i32 = 2026;

    fn request(filters: FilterState) -> SearchRequest {
        SearchRequest {
            query: "dune".to_string(),
            filters,
            revision: 1,
        }
    }

    #[test]
    fn test_inactive_facets_stay_off_the_wire() {
        let params = search_params(&request(FilterState::unfiltered(YEAR)), YEAR);
        assert_eq!(params, vec![("q", "dune".to_string())]);
    }

    #[test]
    fn test_active_facets_are_sent() {
        let mut filters = FilterState::unfiltered(YEAR);
        filters.toggle_genre("Drama");
        filters.toggle_genre("Action");
        filters.set_year_max(2010, YEAR);
        filters.set_rating_min(7.5);
        filters.category = Some("trending".to_string());

        let params = search_params(&request(filters), YEAR);
        assert_eq!(
            params,
            vec![
                ("q", "dune".to_string()),
                ("genre", "Action,Drama".to_string()),
                ("year", "2010".to_string()),
                ("rating", "7.5".to_string()),
                ("category", "trending".to_string()),
            ]
        );
    }
}
