// src/domain/filters.rs
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Lower bound of the year facet. The UI renders a dual-ended year slider,
/// but only the upper bound is part of the remote contract.
pub const MIN_YEAR: i32 = 1990;

/// Upper bound of the rating-floor facet (community scale is 0..10).
pub const RATING_FLOOR_MAX: f64 = 10.0;

/// The rating floor moves in half-point steps.
pub const RATING_FLOOR_STEP: f64 = 0.5;

/// One canonical set of search facets.
///
/// Genres use OR semantics: a movie matches if it has any selected genre,
/// and an empty set means "no genre constraint", not "match nothing".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub genres: BTreeSet<String>,

    /// Upper bound on release year, within [MIN_YEAR, current year]
    #[serde(rename = "year")]
    pub year_max: i32,

    /// Minimum community rating, within [0, 10] in 0.5 steps
    #[serde(rename = "rating")]
    pub rating_min: f64,

    /// Feed shortcut category, merged into the outgoing request when present
    #[serde(default)]
    pub category: Option<String>,
}

impl FilterState {
    /// The neutral state for a given current year: no facet narrows anything.
    pub fn unfiltered(current_year: i32) -> Self {
        Self {
            genres: BTreeSet::new(),
            year_max: current_year,
            rating_min: 0.0,
            category: None,
        }
    }

    /// Toggle genre membership: add if absent, remove if present.
    pub fn toggle_genre(&mut self, genre: &str) {
        if !self.genres.remove(genre) {
            self.genres.insert(genre.to_string());
        }
    }

    /// Commit the upper year bound, clamped to [MIN_YEAR, current_year].
    pub fn set_year_max(&mut self, year: i32, current_year: i32) {
        self.year_max = year.clamp(MIN_YEAR, current_year);
    }

    /// Commit the rating floor, clamped to [0, 10] and snapped to 0.5 steps.
    pub fn set_rating_min(&mut self, rating: f64) {
        let clamped = rating.clamp(0.0, RATING_FLOOR_MAX);
        self.rating_min = (clamped / RATING_FLOOR_STEP).round() * RATING_FLOOR_STEP;
    }

    /// True iff any facet narrows the result set. The category shortcut is
    /// navigation context, not a facet, so it does not count.
    pub fn has_active_filters(&self, current_year: i32) -> bool {
        !self.genres.is_empty() || self.year_max != current_year || self.rating_min > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    #[test]
    fn test_unfiltered_has_no_active_filters() {
        let filters = FilterState::unfiltered(YEAR);
        assert!(!filters.has_active_filters(YEAR));
    }

    #[test]
    fn test_toggle_genre_adds_then_removes() {
        let mut filters = FilterState::unfiltered(YEAR);
        filters.toggle_genre("Action");
        assert!(filters.genres.contains("Action"));
        assert!(filters.has_active_filters(YEAR));

        filters.toggle_genre("Action");
        assert!(filters.genres.is_empty());
        assert!(!filters.has_active_filters(YEAR));
    }

    #[test]
    fn test_year_max_is_clamped() {
        let mut filters = FilterState::unfiltered(YEAR);
        filters.set_year_max(1960, YEAR);
        assert_eq!(filters.year_max, MIN_YEAR);

        filters.set_year_max(YEAR + 5, YEAR);
        assert_eq!(filters.year_max, YEAR);

        filters.set_year_max(2010, YEAR);
        assert_eq!(filters.year_max, 2010);
        assert!(filters.has_active_filters(YEAR));
    }

    #[test]
    fn test_rating_min_is_clamped_and_snapped() {
        let mut filters = FilterState::unfiltered(YEAR);
        filters.set_rating_min(7.3);
        assert_eq!(filters.rating_min, 7.5);

        filters.set_rating_min(-2.0);
        assert_eq!(filters.rating_min, 0.0);

        filters.set_rating_min(11.0);
        assert_eq!(filters.rating_min, RATING_FLOOR_MAX);
    }

    #[test]
    fn test_rating_floor_counts_as_active() {
        let mut filters = FilterState::unfiltered(YEAR);
        filters.set_rating_min(0.5);
        assert!(filters.has_active_filters(YEAR));
    }
}
