//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                 - Product list page (search + filter via query params)
//! GET  /health           - Health check
//!
//! # Products (HTMX fragments swap into #modal)
//! GET  /products/new     - Create product modal
//! POST /products         - Create product (multipart form)
//! GET  /products/{id}    - Product detail modal
//!
//! # Media
//! GET  /media/{id}       - Serve an uploaded product image
//! ```

pub mod media;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route("/new", get(products::new_modal))
        .route("/{id}", get(products::detail_modal))
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Product list page
        .route("/", get(products::index))
        // Product routes
        .nest("/products", product_routes())
        // Uploaded images
        .route("/media/{id}", get(media::serve))
}
