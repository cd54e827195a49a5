// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod filters;
pub mod movie;
pub mod profile;
pub mod rating;
pub mod session;
pub mod watchlist;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Movie Domain
pub use movie::{CastMember, CrewMember, Genre, Movie, MovieSummary};

// Watchlist Domain
pub use watchlist::{
    validate_watchlist, validate_watchlist_description, validate_watchlist_name, Watchlist,
};

// Rating Domain
pub use rating::{validate_rating_value, Rating, RATING_MAX, RATING_MIN};

// Profile Domain
pub use profile::{Profile, ProfileUpdate};

// Session Domain
pub use session::Session;

// Search Filters
pub use filters::{FilterState, MIN_YEAR, RATING_FLOOR_MAX, RATING_FLOOR_STEP};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Rating {0} is out of range (must be 1..=5)")]
    RatingOutOfRange(u8),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
