// src/application/state.rs
use std::sync::{Arc, Mutex};

use crate::gateways::{AuthGateway, CatalogGateway, CollectionGateway};
use crate::services::{CollectionStore, FeedAggregator, SearchQueryComposer, SessionManager};
use crate::storage::TokenStore;

/// Composition root. All collaborators are injected as trait objects so the
/// renderer and tests can supply fakes without touching any ambient global.
pub struct AppState {
    pub session: Arc<SessionManager>,
    pub collections: Arc<CollectionStore>,
    pub feeds: Arc<FeedAggregator>,
    pub search: Mutex<SearchQueryComposer>,
}

impl AppState {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        catalog: Arc<dyn CatalogGateway>,
        collection_gateway: Arc<dyn CollectionGateway>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        let session = Arc::new(SessionManager::new(auth, tokens));
        let collections = Arc::new(CollectionStore::new(collection_gateway, session.clone()));
        let feeds = Arc::new(FeedAggregator::new(catalog));

        Self {
            session,
            collections,
            feeds,
            search: Mutex::new(SearchQueryComposer::new()),
        }
    }

    /// A logout is a hard reset, not a partial teardown: both tokens go,
    /// and every piece of in-memory application state is discarded to be
    /// rebuilt from scratch on next load.
    pub fn logout(&self) {
        self.session.logout();
        self.collections.reset();
        self.search.lock().unwrap().reset();
    }
}
