// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A local precondition failed. Rejected before any state mutation or
    /// remote call, so no rollback is ever needed for this kind.
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    #[error("Authentication error: {0}")]
    Auth(String),

    /// A gateway call failed, returned a non-success outcome, or produced a
    /// payload that does not match its declared shape.
    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Remote(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Rendering hint for a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Normal,
    Destructive,
}

/// A displayable outcome message. Failed mutations always produce one of
/// these; rendering it is the presentation layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserNotice {
    pub message: String,
    pub variant: NoticeVariant,
}

impl UserNotice {
    pub fn normal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: NoticeVariant::Normal,
        }
    }

    pub fn destructive(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}

impl AppError {
    /// Convert a failure into the notice the presentation layer shows.
    pub fn notice(&self) -> UserNotice {
        match self {
            AppError::Validation(_) | AppError::NotFound(_) => UserNotice::normal(self.to_string()),
            _ => UserNotice::destructive(self.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_remote_failures_are_destructive() {
        let notice = AppError::Remote("service unavailable".to_string()).notice();
        assert_eq!(notice.variant, NoticeVariant::Destructive);
        assert!(notice.message.contains("service unavailable"));
    }

    #[test]
    fn test_validation_failures_are_normal() {
        let err = AppError::Validation(DomainError::RatingOutOfRange(9));
        let notice = err.notice();
        assert_eq!(notice.variant, NoticeVariant::Normal);
        assert!(notice.message.contains("out of range"));
    }
}
