//! The product record.
//!
//! Field set matches the upstream catalog's JSON objects; every field is
//! present on fetched records. Locally created records fill the same
//! shape, with the `image` field holding a session-local media reference
//! instead of an upstream URL.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Aggregate customer rating of a product.
///
/// The two halves always travel together; a record either has a full
/// rating or (for drafts) none yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating value (e.g. 3.9).
    pub rate: Decimal,
    /// Number of ratings behind the average.
    pub count: u64,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Upstream-issued or locally assigned identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price. Never negative.
    pub price: Decimal,
    /// Long-form description.
    pub description: String,
    /// Category name. Open-ended; the data drives the set.
    pub category: String,
    /// Image URL, or a session-local `/media/{id}` reference.
    pub image: String,
    /// Aggregate rating.
    pub rating: Rating,
}
