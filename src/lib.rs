// src/lib.rs
// MovieHub Core - client-side session and collection-state orchestration
//
// Architecture:
// - Domain-centric: entities and invariants live in `domain`
// - Gateway boundary: the remote service is consumed through trait
//   contracts; reqwest implementations live behind them
// - Optimistic: collection mutations apply locally first and reconcile on
//   remote failure
// - Explicit: no ambient globals; everything is injected through `AppState`

// ============================================================================
// MODULES
// ============================================================================

pub mod application;
pub mod domain;
pub mod error;
pub mod gateways;
pub mod services;
pub mod storage;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_rating_value,
    validate_watchlist,
    validate_watchlist_description,
    validate_watchlist_name,
    CastMember,
    CrewMember,
    // Search facets
    FilterState,
    Genre,
    // Movie
    Movie,
    MovieSummary,
    // Profile
    Profile,
    ProfileUpdate,
    // Rating
    Rating,
    // Session
    Session,
    // Watchlist
    Watchlist,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use domain::{DomainError, DomainResult};
pub use error::{AppError, AppResult, NoticeVariant, UserNotice};

// ============================================================================
// PUBLIC API - Gateways
// ============================================================================

pub use gateways::{
    ApiClient, AuthGateway, CatalogGateway, CollectionGateway, HttpAuthGateway,
    HttpCatalogGateway, HttpCollectionGateway, SearchRequest, SearchResults, TokenPair,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use storage::{InMemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Collection Store
    CollectionSnapshot,
    CollectionStore,
    // Feed Aggregator
    FeedAggregator,
    HomeFeeds,
    // Search Query Composer
    SearchQueryComposer,
    // Session Manager
    SessionManager,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
