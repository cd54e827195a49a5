// src/gateways/mod.rs
//
// Gateway Contracts - Remote Collaborator Boundary
//
// The core never talks to the network directly; it consumes these trait
// contracts. Concrete reqwest-backed implementations live in `http/`.

pub mod auth_gateway;
pub mod catalog_gateway;
pub mod collection_gateway;
pub mod http;

pub use auth_gateway::{AuthGateway, TokenPair};
pub use catalog_gateway::{CatalogGateway, SearchRequest, SearchResults};
pub use collection_gateway::CollectionGateway;

pub use http::{ApiClient, HttpAuthGateway, HttpCatalogGateway, HttpCollectionGateway};

#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
#[cfg(test)]
pub use catalog_gateway::MockCatalogGateway;
#[cfg(test)]
pub use collection_gateway::MockCollectionGateway;
