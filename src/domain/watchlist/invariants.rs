// src/domain/watchlist/invariants.rs
use std::collections::HashSet;

use super::entity::Watchlist;
use crate::domain::{DomainError, DomainResult};

pub const NAME_MAX_LEN: usize = 50;
pub const DESCRIPTION_MAX_LEN: usize = 200;

/// Validates all Watchlist invariants
pub fn validate_watchlist(watchlist: &Watchlist) -> DomainResult<()> {
    validate_watchlist_name(&watchlist.name)?;
    if let Some(description) = &watchlist.description {
        validate_watchlist_description(description)?;
    }
    validate_movie_sequences(watchlist)?;
    Ok(())
}

/// Name is required and bounded to 50 chars
pub fn validate_watchlist_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Watchlist name cannot be empty".to_string(),
        ));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(DomainError::InvariantViolation(format!(
            "Watchlist name exceeds {} characters",
            NAME_MAX_LEN
        )));
    }
    Ok(())
}

/// Description is optional and bounded to 200 chars
pub fn validate_watchlist_description(description: &str) -> DomainResult<()> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(DomainError::InvariantViolation(format!(
            "Watchlist description exceeds {} characters",
            DESCRIPTION_MAX_LEN
        )));
    }
    Ok(())
}

/// `movie_ids` has no duplicates and stays in lock-step with `movies`
fn validate_movie_sequences(watchlist: &Watchlist) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for id in &watchlist.movie_ids {
        if !seen.insert(id) {
            return Err(DomainError::InvariantViolation(format!(
                "Watchlist contains duplicate movie id {}",
                id
            )));
        }
    }

    if watchlist.movie_ids.len() != watchlist.movies.len() {
        return Err(DomainError::InvariantViolation(
            "Watchlist movie ids and details are out of step".to_string(),
        ));
    }
    for (id, movie) in watchlist.movie_ids.iter().zip(&watchlist.movies) {
        if id != &movie.id {
            return Err(DomainError::InvariantViolation(
                "Watchlist movie ids and details are out of order".to_string(),
            ));
        }
    }
    Ok(())
}
