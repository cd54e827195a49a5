// src/services/session_service_tests.rs
//
// Session lifecycle tests: the Anonymous/Authenticated state machine, the
// pair atomicity of the two tokens, and the startup seeding rules.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::error::AppError;
    use crate::gateways::auth_gateway::TokenPair;
    use crate::gateways::MockAuthGateway;
    use crate::services::SessionManager;
    use crate::storage::{InMemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

    fn manager_with(auth: MockAuthGateway, tokens: Arc<InMemoryTokenStore>) -> SessionManager {
        SessionManager::new(Arc::new(auth), tokens)
    }

    #[tokio::test]
    async fn test_login_success_persists_both_tokens() {
        let mut auth = MockAuthGateway::new();
        auth.expect_login().returning(|_, _| {
            Ok(TokenPair {
                access_token: Some("a1".to_string()),
                refresh_token: Some("r1".to_string()),
            })
        });
        let tokens = Arc::new(InMemoryTokenStore::new());
        let manager = manager_with(auth, tokens.clone());

        assert!(!manager.is_authenticated());
        manager.login("user@example.com", "hunter2").await.unwrap();

        assert!(manager.is_authenticated());
        assert_eq!(tokens.get(ACCESS_TOKEN_KEY).as_deref(), Some("a1"));
        assert_eq!(tokens.get(REFRESH_TOKEN_KEY).as_deref(), Some("r1"));
        assert_eq!(manager.access_token().as_deref(), Some("a1"));
    }

    #[tokio::test]
    async fn test_login_without_tokens_is_a_failure() {
        let mut auth = MockAuthGateway::new();
        auth.expect_login()
            .returning(|_, _| Ok(TokenPair::default()));
        let tokens = Arc::new(InMemoryTokenStore::new());
        let manager = manager_with(auth, tokens.clone());

        let err = manager
            .login("user@example.com", "hunter2")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Auth(_)));
        assert!(!manager.is_authenticated());
        assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
        assert!(tokens.get(REFRESH_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_login_with_half_pair_is_a_failure() {
        let mut auth = MockAuthGateway::new();
        auth.expect_login().returning(|_, _| {
            Ok(TokenPair {
                access_token: Some("a1".to_string()),
                refresh_token: None,
            })
        });
        let tokens = Arc::new(InMemoryTokenStore::new());
        let manager = manager_with(auth, tokens.clone());

        let err = manager
            .login("user@example.com", "hunter2")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Auth(_)));
        assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_login_remote_failure_clears_tokens() {
        let mut auth = MockAuthGateway::new();
        auth.expect_login()
            .returning(|_, _| Err(AppError::Remote("invalid credentials".to_string())));
        let tokens = Arc::new(InMemoryTokenStore::new());
        tokens.set(ACCESS_TOKEN_KEY, "stale-a");
        tokens.set(REFRESH_TOKEN_KEY, "stale-r");
        let manager = manager_with(auth, tokens.clone());

        assert!(manager.is_authenticated());
        let err = manager
            .login("user@example.com", "wrong")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Auth(_)));
        assert!(!manager.is_authenticated());
        assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
        assert!(tokens.get(REFRESH_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_register_success_does_not_authenticate() {
        let mut auth = MockAuthGateway::new();
        auth.expect_register().returning(|_, _| Ok(()));
        let tokens = Arc::new(InMemoryTokenStore::new());
        let manager = manager_with(auth, tokens);

        manager
            .register("user@example.com", "hunter2")
            .await
            .unwrap();
        assert!(!manager.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_failure_clears_stale_credentials() {
        let mut auth = MockAuthGateway::new();
        auth.expect_register()
            .returning(|_, _| Err(AppError::Remote("email taken".to_string())));
        let tokens = Arc::new(InMemoryTokenStore::new());
        tokens.set(ACCESS_TOKEN_KEY, "stale-a");
        tokens.set(REFRESH_TOKEN_KEY, "stale-r");
        let manager = manager_with(auth, tokens.clone());

        let err = manager
            .register("user@example.com", "hunter2")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Auth(_)));
        assert!(!manager.is_authenticated());
        assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
        assert!(tokens.get(REFRESH_TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_both_tokens() {
        let auth = MockAuthGateway::new();
        let tokens = Arc::new(InMemoryTokenStore::new());
        tokens.set(ACCESS_TOKEN_KEY, "a1");
        tokens.set(REFRESH_TOKEN_KEY, "r1");
        let manager = manager_with(auth, tokens.clone());

        assert!(manager.is_authenticated());
        manager.logout();

        assert!(!manager.is_authenticated());
        assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
        assert!(tokens.get(REFRESH_TOKEN_KEY).is_none());
    }

    #[test]
    fn test_startup_seeds_authenticated_from_complete_pair() {
        let tokens = Arc::new(InMemoryTokenStore::new());
        tokens.set(ACCESS_TOKEN_KEY, "a1");
        tokens.set(REFRESH_TOKEN_KEY, "r1");
        let manager = manager_with(MockAuthGateway::new(), tokens);
        assert!(manager.is_authenticated());
    }

    #[test]
    fn test_startup_clears_incomplete_pair() {
        let tokens = Arc::new(InMemoryTokenStore::new());
        tokens.set(ACCESS_TOKEN_KEY, "a1");
        let manager = manager_with(MockAuthGateway::new(), tokens.clone());

        assert!(!manager.is_authenticated());
        assert!(tokens.get(ACCESS_TOKEN_KEY).is_none());
    }

    #[test]
    fn test_startup_clears_empty_token_pair() {
        let tokens = Arc::new(InMemoryTokenStore::new());
        tokens.set(ACCESS_TOKEN_KEY, "");
        tokens.set(REFRESH_TOKEN_KEY, "r1");
        let manager = manager_with(MockAuthGateway::new(), tokens.clone());

        assert!(!manager.is_authenticated());
        assert!(tokens.get(REFRESH_TOKEN_KEY).is_none());
    }
}
