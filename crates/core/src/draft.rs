//! Draft product form state.
//!
//! A draft holds raw input text for every field of a future product; the
//! numeric fields are only interpreted when the draft is promoted to a
//! [`Product`]. Fields are addressed through [`DraftField`], a closed enum
//! of the seven editable paths, so a typo in a form name can only ever be
//! ignored - it cannot silently create a new field or clobber a nested
//! sibling.

use rust_decimal::Decimal;

use crate::types::{Product, ProductId, Rating};
use crate::validate::{self, ValidationErrors};

/// The editable fields of a draft, including the two halves of the
/// nested rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Title,
    Category,
    Price,
    RatingRate,
    RatingCount,
    Description,
    Image,
}

impl DraftField {
    /// Every editable field, in form layout order.
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::Category,
        Self::Price,
        Self::RatingRate,
        Self::RatingCount,
        Self::Description,
        Self::Image,
    ];

    /// The wire name used by form inputs. Nested fields keep their
    /// dotted spelling on the wire only.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Price => "price",
            Self::RatingRate => "rating.rate",
            Self::RatingCount => "rating.count",
            Self::Description => "description",
            Self::Image => "image",
        }
    }

    /// Parse a wire name. Unknown names are `None`; callers skip them.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "title" => Some(Self::Title),
            "category" => Some(Self::Category),
            "price" => Some(Self::Price),
            "rating.rate" => Some(Self::RatingRate),
            "rating.count" => Some(Self::RatingCount),
            "description" => Some(Self::Description),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    /// Message shown when the field is left empty.
    #[must_use]
    pub const fn required_message(self) -> &'static str {
        match self {
            Self::Title => "Title is required",
            Self::Category => "Category is required",
            Self::Price => "Price is required",
            Self::RatingRate => "Rate is required",
            Self::RatingCount => "Count is required",
            Self::Description => "Description is required",
            Self::Image => "Image is required",
        }
    }
}

/// The rating halves of a draft, as raw input text.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftRating {
    pub rate: String,
    pub count: String,
}

/// An in-progress product entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftProduct {
    pub title: String,
    pub category: String,
    pub price: String,
    /// Session-local media reference once an image has been picked.
    pub image: String,
    pub rating: DraftRating,
    pub description: String,
}

impl DraftProduct {
    /// Set one field by path. Setting a rating half touches only that
    /// half; the sibling keeps its value.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Category => self.category = value,
            DraftField::Price => self.price = value,
            DraftField::RatingRate => self.rating.rate = value,
            DraftField::RatingCount => self.rating.count = value,
            DraftField::Description => self.description = value,
            DraftField::Image => self.image = value,
        }
    }

    /// Read one field back by path.
    #[must_use]
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Category => &self.category,
            DraftField::Price => &self.price,
            DraftField::RatingRate => &self.rating.rate,
            DraftField::RatingCount => &self.rating.count,
            DraftField::Description => &self.description,
            DraftField::Image => &self.image,
        }
    }

    /// Promote the draft to a [`Product`] with a freshly minted local id.
    ///
    /// This is the only place local products are constructed. Validation
    /// gates on presence, not well-formedness, so numeric fields are
    /// parsed tolerantly here: unparseable input becomes zero and
    /// negative prices or rates are floored to zero, keeping the
    /// `price >= 0` invariant intact.
    #[must_use]
    pub fn into_product(self) -> Product {
        Product {
            id: ProductId::local(),
            title: self.title,
            price: parse_decimal_or_zero(&self.price),
            description: self.description,
            category: self.category,
            image: self.image,
            rating: Rating {
                rate: parse_decimal_or_zero(&self.rating.rate),
                count: self.rating.count.trim().parse().unwrap_or(0),
            },
        }
    }
}

fn parse_decimal_or_zero(raw: &str) -> Decimal {
    raw.trim()
        .parse::<Decimal>()
        .map_or(Decimal::ZERO, |value| value.max(Decimal::ZERO))
}

/// Create-product form controller: one draft plus its current errors.
#[derive(Debug, Default, Clone)]
pub struct ProductForm {
    draft: DraftProduct,
    errors: ValidationErrors,
}

impl ProductForm {
    /// A pristine form: empty draft, no errors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft values.
    #[must_use]
    pub const fn draft(&self) -> &DraftProduct {
        &self.draft
    }

    /// Errors recorded by the last failed [`Self::submit`].
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Update one field by path. Errors are left as they are until the
    /// next submit.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Store the media reference derived from a picked image file.
    pub fn set_image(&mut self, reference: impl Into<String>) {
        self.draft.set(DraftField::Image, reference);
    }

    /// Restore the pristine state.
    pub fn reset(&mut self) {
        self.draft = DraftProduct::default();
        self.errors = ValidationErrors::default();
    }

    /// Validate and, if clean, promote the draft.
    ///
    /// On success the completed product is returned and the form resets;
    /// the caller hands the product to the store. On failure the errors
    /// are recorded, the draft keeps its values, and `None` is returned.
    pub fn submit(&mut self) -> Option<Product> {
        let errors = validate::validate(&self.draft);
        if errors.is_empty() {
            let product = std::mem::take(&mut self.draft).into_product();
            self.errors = ValidationErrors::default();
            Some(product)
        } else {
            self.errors = errors;
            None
        }
    }

    /// Split the form into its draft and errors, for re-rendering.
    #[must_use]
    pub fn into_parts(self) -> (DraftProduct, ValidationErrors) {
        (self.draft, self.errors)
    }
}
