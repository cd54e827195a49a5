// src/services/session_service.rs
use std::sync::{Arc, Mutex};

use log::{debug, warn};

use crate::domain::Session;
use crate::error::{AppError, AppResult};
use crate::gateways::AuthGateway;
use crate::storage::{TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// Owns the authenticated/anonymous boundary and the credential token pair.
///
/// Two states: Anonymous and Authenticated. The initial state is seeded once
/// from the token store at construction and is not revalidated against the
/// remote service. Tokens are always written and cleared as a pair.
pub struct SessionManager {
    auth: Arc<dyn AuthGateway>,
    tokens: Arc<dyn TokenStore>,
    session: Mutex<Session>,
}

impl SessionManager {
    pub fn new(auth: Arc<dyn AuthGateway>, tokens: Arc<dyn TokenStore>) -> Self {
        let session = Self::seed_session(tokens.as_ref());
        Self {
            auth,
            tokens,
            session: Mutex::new(session),
        }
    }

    /// Derive the initial state from persisted storage. A half-present pair
    /// violates pair atomicity and is cleared rather than trusted.
    fn seed_session(tokens: &dyn TokenStore) -> Session {
        let access = tokens.get(ACCESS_TOKEN_KEY);
        let refresh = tokens.get(REFRESH_TOKEN_KEY);

        match (access, refresh) {
            (Some(access), Some(refresh)) => {
                if let Some(session) = Session::authenticated(&access, &refresh) {
                    return session;
                }
                tokens.remove(ACCESS_TOKEN_KEY);
                tokens.remove(REFRESH_TOKEN_KEY);
                Session::anonymous()
            }
            (None, None) => Session::anonymous(),
            _ => {
                warn!("incomplete token pair in storage, clearing");
                tokens.remove(ACCESS_TOKEN_KEY);
                tokens.remove(REFRESH_TOKEN_KEY);
                Session::anonymous()
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.lock().unwrap().is_authenticated()
    }

    pub fn access_token(&self) -> Option<String> {
        self.session
            .lock()
            .unwrap()
            .access_token()
            .map(str::to_string)
    }

    /// Authenticate against the remote service. A success response missing
    /// either token is treated as a failure, not success: tokens are cleared
    /// and the session stays Anonymous.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<()> {
        let pair = match self.auth.login(email, password).await {
            Ok(pair) => pair,
            Err(err) => {
                self.clear_tokens();
                return Err(AppError::Auth(format!("Login failed: {}", err)));
            }
        };

        let session = match (&pair.access_token, &pair.refresh_token) {
            (Some(access), Some(refresh)) => {
                Session::authenticated(access, refresh).map(|session| (session, access, refresh))
            }
            _ => None,
        };

        let Some((session, access, refresh)) = session else {
            warn!("login response missing tokens");
            self.clear_tokens();
            return Err(AppError::Auth("missing tokens".to_string()));
        };

        // Persist first, then transition; both tokens land together.
        self.tokens.set(ACCESS_TOKEN_KEY, access);
        self.tokens.set(REFRESH_TOKEN_KEY, refresh);
        *self.session.lock().unwrap() = session;

        debug!("session authenticated");
        Ok(())
    }

    /// Create an account. Registration does not imply login, so a success
    /// leaves the session untouched; a failure must never leave stale
    /// credentials behind.
    pub async fn register(&self, email: &str, password: &str) -> AppResult<()> {
        if let Err(err) = self.auth.register(email, password).await {
            self.clear_tokens();
            return Err(AppError::Auth(format!("Registration failed: {}", err)));
        }
        Ok(())
    }

    /// Clear both tokens unconditionally and return to Anonymous. A logout
    /// is a hard reset; discarding the rest of the in-memory application
    /// state is the composition root's job (see `AppState::logout`).
    pub fn logout(&self) {
        debug!("session logged out");
        self.clear_tokens();
    }

    fn clear_tokens(&self) {
        self.tokens.remove(ACCESS_TOKEN_KEY);
        self.tokens.remove(REFRESH_TOKEN_KEY);
        self.session.lock().unwrap().clear();
    }
}
