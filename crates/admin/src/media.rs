//! In-memory store for uploaded product images.
//!
//! Images picked in the create form are held in process memory and served
//! back under `/media/{id}`. The stored reference is what the product's
//! image field carries, so it stays valid for the lifetime of the process,
//! like the rest of the catalog.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use axum::body::Bytes;
use thiserror::Error;
use uuid::Uuid;

/// Media store errors.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Store error: {0}")]
    Store(String),
}

/// An uploaded image held in memory.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub content_type: String,
    pub bytes: Bytes,
}

/// The in-memory image store.
///
/// Cheaply cloneable; all clones share the same map.
#[derive(Clone)]
pub struct MediaStore {
    inner: Arc<RwLock<HashMap<Uuid, StoredImage>>>,
}

impl Default for MediaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaStore {
    /// Create a new empty media store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Store an image and return the reference path it is served under.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned.
    pub fn store(&self, content_type: String, bytes: Bytes) -> Result<String, MediaError> {
        let id = Uuid::new_v4();

        self.inner
            .write()
            .map_err(|_| MediaError::Store("Lock poisoned".to_string()))?
            .insert(
                id,
                StoredImage {
                    content_type,
                    bytes,
                },
            );

        Ok(format!("/media/{id}"))
    }

    /// Look up an image by id.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<StoredImage> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.get(&id).cloned())
    }

    /// Number of stored images, or 0 if the lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().map(|guard| guard.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
