// src/gateways/auth_gateway.rs
use async_trait::async_trait;

use crate::error::AppResult;

/// Credential pair returned by a successful login call.
///
/// Both fields are optional on purpose: a malformed success payload (missing
/// one or both tokens) must be representable so the session layer can treat
/// it as a failure rather than trusting the response shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

/// Remote authentication endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> AppResult<TokenPair>;

    /// Registration does not imply login; no tokens are returned.
    async fn register(&self, email: &str, password: &str) -> AppResult<()>;
}
