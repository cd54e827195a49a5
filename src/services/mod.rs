// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod collection_service;
pub mod feed_service;
pub mod search_service;
pub mod session_service;

#[cfg(test)]
mod session_service_tests;

// Re-export all services and their types
pub use collection_service::{CollectionSnapshot, CollectionStore};

pub use feed_service::{FeedAggregator, HomeFeeds};

pub use search_service::SearchQueryComposer;

pub use session_service::SessionManager;
