//! Catalog filtering.
//!
//! Pure functions over product slices. Three independent criteria combine
//! with AND: a case-insensitive title substring, an exact category match,
//! and a price ceiling. An empty criterion never constrains, and a price
//! ceiling that does not parse as a number is treated the same as an
//! empty one - filtering is forgiving by contract, never an error.

use rust_decimal::Decimal;

use crate::types::Product;

/// Filter value of the "All" category option. Matches every product.
pub const ALL_CATEGORIES: &str = "";

/// Active filter controls for the product table.
///
/// All three fields hold raw input text; interpretation happens at
/// evaluation time so stale or junk input can never wedge the table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Title search text.
    pub search_query: String,
    /// Selected category, or [`ALL_CATEGORIES`].
    pub category: String,
    /// Price ceiling as entered. See [`Self::price_limit`].
    pub max_price: String,
}

impl FilterCriteria {
    /// Whether every criterion is empty (the pristine state).
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.search_query.is_empty() && self.category.is_empty() && self.max_price.is_empty()
    }

    /// Reset all criteria, the "Clear Filters" control.
    pub fn clear(&mut self) {
        self.search_query.clear();
        self.category.clear();
        self.max_price.clear();
    }

    /// The effective price ceiling.
    ///
    /// Empty or unparseable input means no ceiling. `"abc"` and `" "`
    /// behave exactly like an untouched field.
    #[must_use]
    pub fn price_limit(&self) -> Option<Decimal> {
        let raw = self.max_price.trim();
        if raw.is_empty() {
            return None;
        }
        raw.parse::<Decimal>().ok()
    }

    /// Whether a product satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let title_matches = product
            .title
            .to_lowercase()
            .contains(&self.search_query.to_lowercase());
        let category_matches = self.category.is_empty() || product.category == self.category;
        let price_matches = self
            .price_limit()
            .is_none_or(|limit| product.price <= limit);

        title_matches && category_matches && price_matches
    }
}

/// Apply `criteria` to `products`, preserving order.
///
/// Always a subset of the input; with unconstrained criteria it is the
/// identity. No pagination, no sorting.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products.iter().filter(|p| criteria.matches(p)).collect()
}

/// One entry of a category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Value submitted with the filter form.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

impl CategoryOption {
    /// Create a new selector option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Derive the category selector options for a product set.
///
/// "All" (empty value) first, then each distinct category in first-seen
/// order. Callers derive this from the *unfiltered* set, so narrowing the
/// table never narrows the selector.
#[must_use]
pub fn category_options(products: &[Product]) -> Vec<CategoryOption> {
    let mut options = vec![CategoryOption::new(ALL_CATEGORIES, "All")];
    for product in products {
        if !options.iter().any(|o| o.value == product.category) {
            options.push(CategoryOption::new(
                product.category.clone(),
                product.category.clone(),
            ));
        }
    }
    options
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{ProductId, Rating};

    fn product(id: u64, title: &str, category: &str, price: &str) -> Product {
        Product {
            id: ProductId::Remote(id),
            title: title.to_owned(),
            price: price.parse().unwrap(),
            description: format!("{title} description"),
            category: category.to_owned(),
            image: format!("https://example.com/{id}.png"),
            rating: Rating {
                rate: "3.5".parse().unwrap(),
                count: 10,
            },
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "Mens Casual Slim Fit Shirt", "men's clothing", "15.99"),
            product(2, "Gold Petite Micropave Ring", "jewelery", "168.00"),
            product(3, "WD 2TB External Hard Drive", "electronics", "64.00"),
            product(4, "Rain Jacket Women Windbreaker", "women's clothing", "39.99"),
        ]
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria::default();

        let result = filter_products(&catalog, &criteria);
        assert_eq!(result.len(), catalog.len());
        for (kept, original) in result.iter().zip(catalog.iter()) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn test_title_search_is_case_insensitive_substring() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            search_query: "SHIRT".to_owned(),
            ..FilterCriteria::default()
        };

        let result = filter_products(&catalog, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().id, ProductId::Remote(1));
    }

    #[test]
    fn test_title_match_iff_lowercased_substring() {
        let catalog = sample_catalog();
        for query in ["shirt", "RING", "2tb", "jacket", "zzz", ""] {
            let criteria = FilterCriteria {
                search_query: query.to_owned(),
                ..FilterCriteria::default()
            };
            let result = filter_products(&catalog, &criteria);
            for p in &catalog {
                let expected = p.title.to_lowercase().contains(&query.to_lowercase());
                assert_eq!(
                    result.iter().any(|kept| kept.id == p.id),
                    expected,
                    "query {query:?} vs title {:?}",
                    p.title
                );
            }
        }
    }

    #[test]
    fn test_category_is_exact_match_or_all() {
        let catalog = sample_catalog();

        let jewelery = FilterCriteria {
            category: "jewelery".to_owned(),
            ..FilterCriteria::default()
        };
        let result = filter_products(&catalog, &jewelery);
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().category, "jewelery");

        // A prefix is not a match
        let partial = FilterCriteria {
            category: "jewel".to_owned(),
            ..FilterCriteria::default()
        };
        assert!(filter_products(&catalog, &partial).is_empty());

        let all = FilterCriteria {
            category: ALL_CATEGORIES.to_owned(),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_products(&catalog, &all).len(), catalog.len());
    }

    #[test]
    fn test_price_ceiling_is_inclusive() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            max_price: "64".to_owned(),
            ..FilterCriteria::default()
        };

        let result = filter_products(&catalog, &criteria);
        let ids: Vec<_> = result.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![ProductId::Remote(1), ProductId::Remote(3), ProductId::Remote(4)]
        );
    }

    #[test]
    fn test_unparseable_price_means_unconstrained() {
        let catalog = sample_catalog();
        for junk in ["abc", "12abc", " ", "$50", "1,000"] {
            let criteria = FilterCriteria {
                max_price: junk.to_owned(),
                ..FilterCriteria::default()
            };
            assert_eq!(
                filter_products(&catalog, &criteria).len(),
                catalog.len(),
                "input {junk:?} should not constrain"
            );
        }
    }

    #[test]
    fn test_price_limit_parsing() {
        let mut criteria = FilterCriteria::default();
        assert_eq!(criteria.price_limit(), None);

        criteria.max_price = " 19.99 ".to_owned();
        assert_eq!(criteria.price_limit(), Some("19.99".parse().unwrap()));

        criteria.max_price = "nope".to_owned();
        assert_eq!(criteria.price_limit(), None);
    }

    #[test]
    fn test_filters_only_restrict() {
        let catalog = sample_catalog();
        let loose = FilterCriteria {
            max_price: "100".to_owned(),
            ..FilterCriteria::default()
        };
        let tight = FilterCriteria {
            max_price: "40".to_owned(),
            ..FilterCriteria::default()
        };

        let loose_ids: Vec<_> = filter_products(&catalog, &loose).iter().map(|p| p.id).collect();
        let tight_ids: Vec<_> = filter_products(&catalog, &tight).iter().map(|p| p.id).collect();

        assert!(loose_ids.len() <= catalog.len());
        assert!(tight_ids.len() <= loose_ids.len());
        for id in &tight_ids {
            assert!(loose_ids.contains(id), "tightening dropped an outsider in");
        }
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let catalog = sample_catalog();
        let criteria = FilterCriteria {
            search_query: "shirt".to_owned(),
            category: "jewelery".to_owned(),
            max_price: String::new(),
        };
        assert!(filter_products(&catalog, &criteria).is_empty());
    }

    #[test]
    fn test_search_then_narrow_then_clear() {
        let catalog = sample_catalog();
        let mut criteria = FilterCriteria {
            search_query: "shirt".to_owned(),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_products(&catalog, &criteria).len(), 1);

        criteria.category = "jewelery".to_owned();
        assert!(filter_products(&catalog, &criteria).is_empty());

        criteria.clear();
        assert!(criteria.is_unconstrained());
        assert_eq!(filter_products(&catalog, &criteria).len(), catalog.len());
    }

    #[test]
    fn test_category_options_first_seen_order_distinct() {
        let catalog = vec![
            product(1, "A", "electronics", "1"),
            product(2, "B", "jewelery", "1"),
            product(3, "C", "electronics", "1"),
            product(4, "D", "men's clothing", "1"),
        ];

        let options = category_options(&catalog);
        let values: Vec<_> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "electronics", "jewelery", "men's clothing"]);
        assert_eq!(options.first().unwrap().label, "All");
    }

    #[test]
    fn test_category_options_of_empty_catalog() {
        let options = category_options(&[]);
        assert_eq!(options.len(), 1);
        assert_eq!(options.first().unwrap().value, ALL_CATEGORIES);
    }
}
