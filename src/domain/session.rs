// src/domain/session.rs

/// The credential pair marking the authenticated/anonymous boundary.
///
/// Invariant: the two tokens are set and cleared atomically as a pair, never
/// one without the other. The session is authenticated iff both are present
/// and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build a session from a token pair. Returns None unless both tokens
    /// are present and non-empty, preserving pair atomicity.
    pub fn authenticated(access_token: &str, refresh_token: &str) -> Option<Self> {
        if access_token.is_empty() || refresh_token.is_empty() {
            return None;
        }
        Some(Self {
            access_token: Some(access_token.to_string()),
            refresh_token: Some(refresh_token.to_string()),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(
            (&self.access_token, &self.refresh_token),
            (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty()
        )
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Drop both tokens at once.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_is_not_authenticated() {
        assert!(!Session::anonymous().is_authenticated());
    }

    #[test]
    fn test_authenticated_requires_both_tokens() {
        assert!(Session::authenticated("a1", "r1").is_some());
        assert!(Session::authenticated("", "r1").is_none());
        assert!(Session::authenticated("a1", "").is_none());
        assert!(Session::authenticated("", "").is_none());
    }

    #[test]
    fn test_clear_drops_both_tokens() {
        let mut session = Session::authenticated("a1", "r1").unwrap();
        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
    }
}
