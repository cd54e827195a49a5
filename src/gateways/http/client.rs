// src/gateways/http/client.rs
use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::storage::{TokenStore, ACCESS_TOKEN_KEY};

/// Success/message envelope returned by every mutation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl StatusResponse {
    /// A `success: false` body is a remote failure carrying the server's
    /// message, even when the HTTP status was 2xx.
    pub fn into_result(self) -> AppResult<String> {
        if self.success {
            Ok(self.message)
        } else {
            Err(AppError::Remote(self.message))
        }
    }
}

/// Shared HTTP plumbing for the MovieHub REST API: base URL joining, bearer
/// token injection, status checking and fail-closed JSON parsing.
pub struct ApiClient {
    base_url: String,
    http: Client,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            http,
            tokens,
        }
    }

    /// Start a request against an API path, attaching the access token when
    /// one is stored.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let mut request = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = self.tokens.get(ACCESS_TOKEN_KEY) {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        request
    }

    /// Send a request and parse its JSON body into the expected schema.
    pub async fn execute<T>(&self, request: RequestBuilder) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::Remote(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AppError::Auth(format!(
                "Request rejected with status {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(AppError::Remote(format!(
                "Server returned status {}",
                status
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Remote(format!("Malformed response payload: {}", e)))
    }
}
