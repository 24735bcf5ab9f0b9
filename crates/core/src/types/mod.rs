//! Core types for Storeroom.
//!
//! The product record as the upstream catalog ships it, plus the
//! identifier type that distinguishes upstream records from ones created
//! in the admin.

pub mod id;
pub mod product;

pub use id::{ParseProductIdError, ProductId};
pub use product::{Product, Rating};
