//! Storeroom Core - catalog domain library.
//!
//! This crate provides the domain types and logic shared by the Storeroom
//! components:
//! - `admin` - Catalog administration panel
//! - `integration-tests` - End-to-end tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no rendering. Fetching the catalog and serving pages live in
//! `storeroom-admin`; everything here is deterministic and directly
//! testable.
//!
//! # Modules
//!
//! - [`types`] - The product record and its identifier
//! - [`store`] - Session product store (seed once, prepend-only additions)
//! - [`filter`] - Pure catalog filtering and category option derivation
//! - [`draft`] - Draft form state with typed field paths
//! - [`validate`] - Required-field validation for drafts

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod draft;
pub mod filter;
pub mod store;
pub mod types;
pub mod validate;

pub use draft::{DraftField, DraftProduct, DraftRating, ProductForm};
pub use filter::{ALL_CATEGORIES, CategoryOption, FilterCriteria, category_options, filter_products};
pub use store::ProductStore;
pub use types::{ParseProductIdError, Product, ProductId, Rating};
pub use validate::{ValidationErrors, validate};
