use std::sync::{Arc, Mutex};

use stockplan_store::DemandStore;

use crate::config::ServiceConfig;

/// Shared application state.
///
/// The demand store is the only mutable state; the mutex serializes
/// concurrent CRUD writes so positional indices stay consistent.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<DemandStore>>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_store(config, DemandStore::new())
    }

    pub fn with_store(config: ServiceConfig, store: DemandStore) -> Self {
        AppState {
            store: Arc::new(Mutex::new(store)),
            config: Arc::new(config),
        }
    }
}
