//! Application state shared across handlers.

use std::sync::{Arc, RwLock};

use storeroom_core::{Product, ProductStore};

use crate::config::AdminConfig;
use crate::media::MediaStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// product store, the media store, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    store: RwLock<ProductStore>,
    media: MediaStore,
}

impl AppState {
    /// Create a new application state with the startup catalog seed.
    ///
    /// The seed is applied exactly once here; an empty seed still counts,
    /// so the panel runs with an empty catalog when the upstream fetch
    /// failed.
    #[must_use]
    pub fn new(config: AdminConfig, seed: Vec<Product>) -> Self {
        let mut store = ProductStore::new();
        store.initialize(seed);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(store),
                media: MediaStore::new(),
            }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the product store.
    #[must_use]
    pub fn store(&self) -> &RwLock<ProductStore> {
        &self.inner.store
    }

    /// Get a reference to the media store.
    #[must_use]
    pub fn media(&self) -> &MediaStore {
        &self.inner.media
    }
}
