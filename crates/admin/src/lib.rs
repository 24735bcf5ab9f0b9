//! Storeroom Admin library.
//!
//! This crate provides the admin panel functionality as a library,
//! allowing it to be tested and reused. The binary in `main.rs` wires
//! it to a listener.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - Catalog seeded once at startup from the upstream product API
//! - In-memory product and image stores (process lifetime, no database)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod media;
pub mod routes;
pub mod state;
