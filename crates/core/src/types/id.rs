//! Product identifiers.
//!
//! The upstream catalog issues plain integer ids. Products created in the
//! admin never see the upstream, so they get a locally assigned UUID
//! instead. Keeping the two in separate variants makes collisions between
//! fetched and local records impossible, which is why the store never has
//! to deduplicate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Identifier of a product record.
///
/// Serializes the way each side expects it: `Remote` as the upstream's
/// JSON number, `Local` as a UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Issued by the upstream catalog.
    Remote(u64),
    /// Assigned in this process when a draft is submitted.
    Local(Uuid),
}

impl ProductId {
    /// Mint a fresh local id (UUID v4).
    #[must_use]
    pub fn local() -> Self {
        Self::Local(Uuid::new_v4())
    }

    /// Whether this id was assigned locally rather than by the upstream.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(id) => write!(f, "{id}"),
            Self::Local(id) => write!(f, "{id}"),
        }
    }
}

/// Error parsing a [`ProductId`] from a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a product id: {0}")]
pub struct ParseProductIdError(String);

impl FromStr for ProductId {
    type Err = ParseProductIdError;

    /// Accepts the same forms `Display` produces: a decimal integer for
    /// remote ids, a hyphenated UUID for local ones.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<u64>() {
            return Ok(Self::Remote(id));
        }
        Uuid::from_str(s)
            .map(Self::Local)
            .map_err(|_| ParseProductIdError(s.to_owned()))
    }
}
