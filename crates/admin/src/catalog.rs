//! Upstream product catalog client.
//!
//! The admin panel does not own product data; it seeds its in-memory store
//! once at startup from a public product API that returns a JSON array of
//! products. Everything after that seed lives in process memory.

use thiserror::Error;
use tracing::instrument;

use storeroom_core::Product;

use crate::config::AdminConfig;

/// Errors that can occur when fetching the upstream catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the upstream product catalog API.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Create a new catalog client for the configured endpoint.
    #[must_use]
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.catalog_api_url.clone(),
        }
    }

    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API responds with a
    /// non-success status, or the body is not a product array.
    #[instrument(skip(self))]
    pub async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;

        tracing::info!(count = products.len(), "Fetched product catalog");
        Ok(products)
    }

    /// Fetch the catalog for the startup seed.
    ///
    /// A failed fetch is logged and yields an empty catalog so the panel
    /// still comes up; it just renders without products.
    pub async fn fetch_seed(&self) -> Vec<Product> {
        match self.fetch_products().await {
            Ok(products) => products,
            Err(error) => {
                tracing::error!(%error, "Failed to fetch product catalog, starting empty");
                Vec::new()
            }
        }
    }
}
