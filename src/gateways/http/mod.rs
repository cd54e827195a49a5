// src/gateways/http/mod.rs
//
// HTTP Gateway Implementations
//
// ARCHITECTURE:
// - Thin reqwest adapters over the REST surface of the MovieHub service
// - Every response is parsed through an explicit envelope schema and fails
//   closed as a remote error on shape mismatch
// - This is INFRASTRUCTURE, not DOMAIN: nothing here mutates store state

pub mod auth;
pub mod catalog;
pub mod client;
pub mod collection;

pub use auth::HttpAuthGateway;
pub use catalog::HttpCatalogGateway;
pub use client::ApiClient;
pub use collection::HttpCollectionGateway;
