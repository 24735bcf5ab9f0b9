//! Integration tests for Storeroom.
//!
//! # Test Categories
//!
//! - `admin_products` - In-process tests driving the admin router directly
//!   through `tower::ServiceExt::oneshot`; no server or network required,
//!   the product store is seeded inside each test.
//! - `live_admin` - Smoke tests against a running admin server. These are
//!   `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process tests (run everywhere, including CI)
//! cargo test -p storeroom-integration-tests
//!
//! # Live smoke tests, against an already running admin
//! cargo run -p storeroom-admin &
//! ADMIN_BASE_URL=http://localhost:3001 \
//!     cargo test -p storeroom-integration-tests -- --ignored
//! ```
