// src/services/search_service.rs
use chrono::{Datelike, Utc};
use log::debug;

use crate::domain::FilterState;
use crate::gateways::SearchRequest;

/// Merges the free-text query, the category shortcut and the facet set into
/// one canonical search request.
///
/// Every committed change produces exactly one new request; the embedded
/// revision stamp lets consumers discard responses that were superseded
/// before they resolved. The composer itself never talks to the gateway.
pub struct SearchQueryComposer {
    query: String,
    filters: FilterState,
    current_year: i32,
    revision: u64,
}

impl SearchQueryComposer {
    pub fn new() -> Self {
        Self::with_current_year(Utc::now().year())
    }

    /// Injectable year bound so the facet clamp is deterministic in tests.
    pub fn with_current_year(current_year: i32) -> Self {
        Self {
            query: String::new(),
            filters: FilterState::unfiltered(current_year),
            current_year,
            revision: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.has_active_filters(self.current_year)
    }

    /// The current canonical request, without committing any change.
    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            query: self.query.clone(),
            filters: self.filters.clone(),
            revision: self.revision,
        }
    }

    fn commit(&mut self) -> SearchRequest {
        self.revision += 1;
        let request = self.request();
        debug!("search request composed, revision {}", request.revision);
        request
    }

    pub fn set_query(&mut self, query: &str) -> SearchRequest {
        self.query = query.to_string();
        self.commit()
    }

    /// Toggle genre membership in the facet set; never exclusive-select.
    pub fn toggle_genre(&mut self, genre: &str) -> SearchRequest {
        self.filters.toggle_genre(genre);
        self.commit()
    }

    /// Commit the upper year bound. The lower bound of the year control is
    /// UI-local framing and never reaches the remote contract.
    pub fn set_year_max(&mut self, year: i32) -> SearchRequest {
        self.filters.set_year_max(year, self.current_year);
        self.commit()
    }

    pub fn set_rating_min(&mut self, rating: f64) -> SearchRequest {
        self.filters.set_rating_min(rating);
        self.commit()
    }

    /// Set or clear the feed-shortcut category, overriding any category
    /// already present in the filter state.
    pub fn set_category(&mut self, category: Option<&str>) -> SearchRequest {
        self.filters.category = category.map(str::to_string);
        self.commit()
    }

    /// Reset all facets and the category. The free-text query survives.
    pub fn clear_filters(&mut self) -> SearchRequest {
        self.filters = FilterState::unfiltered(self.current_year);
        self.commit()
    }

    /// Full reset, used when the search view is torn down.
    pub fn reset(&mut self) {
        self.query.clear();
        self.filters = FilterState::unfiltered(self.current_year);
    }
}

impl Default for SearchQueryComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MIN_YEAR;

    const YEAR: i32 = 2026;

    fn composer() -> SearchQueryComposer {
        SearchQueryComposer::with_current_year(YEAR)
    }

    #[test]
    fn test_each_change_produces_one_request() {
        let mut composer = composer();
        let first = composer.set_query("dune");
        let second = composer.toggle_genre("Action");
        assert_eq!(first.revision + 1, second.revision);
        assert_eq!(second.query, "dune");
        assert!(second.filters.genres.contains("Action"));
    }

    #[test]
    fn test_genre_toggle_is_membership_not_exclusive() {
        let mut composer = composer();
        composer.toggle_genre("Action");
        let request = composer.toggle_genre("Drama");
        assert_eq!(request.filters.genres.len(), 2);

        let request = composer.toggle_genre("Action");
        assert_eq!(request.filters.genres.len(), 1);
        assert!(request.filters.genres.contains("Drama"));
    }

    #[test]
    fn test_only_upper_year_bound_is_committed() {
        let mut composer = composer();
        let request = composer.set_year_max(2010);
        assert_eq!(request.filters.year_max, 2010);

        // Out-of-bound values clamp to the contract range.
        assert_eq!(composer.set_year_max(1800).filters.year_max, MIN_YEAR);
        assert_eq!(composer.set_year_max(3000).filters.year_max, YEAR);
    }

    #[test]
    fn test_category_overrides_existing() {
        let mut composer = composer();
        composer.set_category(Some("trending"));
        let request = composer.set_category(Some("top-rated"));
        assert_eq!(request.filters.category.as_deref(), Some("top-rated"));

        let request = composer.set_category(None);
        assert!(request.filters.category.is_none());
    }

    #[test]
    fn test_clear_filters_is_idempotent_and_keeps_query() {
        let mut composer = composer();
        composer.set_query("dune");
        composer.toggle_genre("Action");
        composer.set_year_max(2000);
        composer.set_rating_min(7.5);
        composer.set_category(Some("trending"));
        assert!(composer.has_active_filters());

        let once = composer.clear_filters();
        let twice = composer.clear_filters();
        assert_eq!(once.filters, twice.filters);
        assert_eq!(once.query, "dune");
        assert!(!composer.has_active_filters());
        assert!(once.filters.category.is_none());
    }

    #[test]
    fn test_has_active_filters_facets() {
        let mut composer = composer();
        assert!(!composer.has_active_filters());

        composer.set_rating_min(0.5);
        assert!(composer.has_active_filters());
        composer.clear_filters();

        composer.set_year_max(YEAR - 1);
        assert!(composer.has_active_filters());
        composer.clear_filters();

        // The category shortcut alone is not a facet.
        composer.set_category(Some("trending"));
        assert!(!composer.has_active_filters());
    }

    #[test]
    fn test_reset_clears_query_too() {
        let mut composer = composer();
        composer.set_query("dune");
        composer.toggle_genre("Action");
        composer.reset();
        assert_eq!(composer.query(), "");
        assert!(!composer.has_active_filters());
    }
}
