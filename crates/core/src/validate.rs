//! Required-field validation for product drafts.
//!
//! Every field of a draft is required. A field fails only when its raw
//! value is the empty string; whitespace counts as content, and numeric
//! fields are not parsed here. Interpretation of numbers happens when
//! the draft is promoted, see [`DraftProduct::into_product`].
//!
//! [`DraftProduct::into_product`]: crate::draft::DraftProduct::into_product

use std::collections::BTreeMap;

use crate::draft::{DraftField, DraftProduct};

/// Check every field of `draft` and collect a message per empty one.
///
/// An empty result means the draft is complete and may be promoted.
#[must_use]
pub fn validate(draft: &DraftProduct) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in DraftField::ALL {
        if draft.value(field).is_empty() {
            errors.insert(field);
        }
    }
    errors
}

/// Per-field validation messages from the last check.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    messages: BTreeMap<DraftField, &'static str>,
}

impl ValidationErrors {
    /// `true` when no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of fields that failed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Message for one field, if it failed.
    #[must_use]
    pub fn get(&self, field: DraftField) -> Option<&'static str> {
        self.messages.get(&field).copied()
    }

    /// Record `field` as missing.
    pub fn insert(&mut self, field: DraftField) {
        self.messages.insert(field, field.required_message());
    }

    // ===== Per-field accessors for templates =====

    #[must_use]
    pub fn title(&self) -> Option<&'static str> {
        self.get(DraftField::Title)
    }

    #[must_use]
    pub fn category(&self) -> Option<&'static str> {
        self.get(DraftField::Category)
    }

    #[must_use]
    pub fn price(&self) -> Option<&'static str> {
        self.get(DraftField::Price)
    }

    #[must_use]
    pub fn rating_rate(&self) -> Option<&'static str> {
        self.get(DraftField::RatingRate)
    }

    #[must_use]
    pub fn rating_count(&self) -> Option<&'static str> {
        self.get(DraftField::RatingCount)
    }

    #[must_use]
    pub fn description(&self) -> Option<&'static str> {
        self.get(DraftField::Description)
    }

    #[must_use]
    pub fn image(&self) -> Option<&'static str> {
        self.get(DraftField::Image)
    }
}
