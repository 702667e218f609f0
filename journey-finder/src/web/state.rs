//! Application state for the web layer.

use std::sync::Arc;

use crate::store::TrainStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Store of known trains
    pub store: Arc<TrainStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: TrainStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
