// src/domain/rating.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// A user's rating of a movie. At most one exists per movie id per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "movieId")]
    pub movie_id: String,

    /// Star value, 1..=5
    #[serde(rename = "rating")]
    pub value: u8,

    #[serde(default)]
    pub review: Option<String>,

    /// Display attributes carried so rated movies can render without a
    /// catalog round trip
    #[serde(rename = "movieTitle", default)]
    pub movie_title: String,

    #[serde(rename = "moviePoster", default)]
    pub movie_poster: String,

    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Value must be within 1..=5. Checked before any remote call.
pub fn validate_rating_value(value: u8) -> DomainResult<()> {
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        return Err(DomainError::RatingOutOfRange(value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_values() {
        for value in RATING_MIN..=RATING_MAX {
            assert!(validate_rating_value(value).is_ok());
        }
    }

    #[test]
    fn test_out_of_range_values_fail() {
        assert!(validate_rating_value(0).is_err());
        assert!(validate_rating_value(6).is_err());
        assert!(validate_rating_value(u8::MAX).is_err());
    }
}
