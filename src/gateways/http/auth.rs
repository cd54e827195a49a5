// src/gateways/http/auth.rs
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use super::client::{ApiClient, StatusResponse};
use crate::error::AppResult;
use crate::gateways::auth_gateway::{AuthGateway, TokenPair};

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(rename = "accessToken", default)]
    access_token: Option<String>,
    #[serde(rename = "refreshToken", default)]
    refresh_token: Option<String>,
}

pub struct HttpAuthGateway {
    api: ApiClient,
}

impl HttpAuthGateway {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, email: &str, password: &str) -> AppResult<TokenPair> {
        let request = self
            .api
            .request(Method::POST, "/api/auth/login")
            .json(&json!({ "email": email, "password": password }));

        let response: LoginResponse = self.api.execute(request).await?;
        Ok(TokenPair {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        })
    }

    async fn register(&self, email: &str, password: &str) -> AppResult<()> {
        let request = self
            .api
            .request(Method::POST, "/api/auth/register")
            .json(&json!({ "email": email, "password": password }));

        let response: StatusResponse = self.api.execute(request).await?;
        response.into_result()?;
        Ok(())
    }
}
