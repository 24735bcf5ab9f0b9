//! In-memory product catalog.
//!
//! The store is seeded once from the upstream catalog and then only ever
//! grows: new products are prepended so the most recent entry renders
//! first, and nothing is updated, deduplicated, or removed. Category
//! filter options are derived from the seed at initialization time and
//! stay fixed afterwards, so the filter dropdown reflects the upstream
//! catalog rather than whatever has been added locally.

use crate::filter::{self, CategoryOption};
use crate::types::{Product, ProductId};

/// The product catalog plus its derived category options.
#[derive(Debug, Default, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
    category_options: Vec<CategoryOption>,
    seeded: bool,
}

impl ProductStore {
    /// An empty, unseeded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with the upstream catalog.
    ///
    /// Only the first call takes effect; it replaces the product list and
    /// derives the category options. Later calls are ignored so a re-run
    /// of startup wiring cannot clobber products added in the meantime.
    /// Returns whether this call did the seeding.
    pub fn initialize(&mut self, products: Vec<Product>) -> bool {
        if self.seeded {
            return false;
        }
        self.category_options = filter::category_options(&products);
        self.products = products;
        self.seeded = true;
        true
    }

    /// Whether [`Self::initialize`] has run.
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// All products, newest local additions first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Prepend a newly created product.
    pub fn add(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    /// Look up one product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Options for the category filter, "All" first, then the seed's
    /// categories in first-seen order.
    #[must_use]
    pub fn category_options(&self) -> &[CategoryOption] {
        &self.category_options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::Rating;

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id: ProductId::Remote(id),
            title: title.to_owned(),
            price: Decimal::new(999, 2),
            description: format!("{title} description"),
            category: category.to_owned(),
            image: format!("https://img.example/{id}.jpg"),
            rating: Rating {
                rate: Decimal::new(40, 1),
                count: 7,
            },
        }
    }

    fn seed() -> Vec<Product> {
        vec![
            product(1, "Backpack", "men's clothing"),
            product(2, "Gold Ring", "jewelery"),
            product(3, "Rain Jacket", "men's clothing"),
        ]
    }

    #[test]
    fn test_initialize_seeds_once() {
        let mut store = ProductStore::new();
        assert!(!store.is_seeded());

        assert!(store.initialize(seed()));
        assert!(store.is_seeded());
        assert_eq!(store.len(), 3);

        // A second seed attempt is a no-op
        assert!(!store.initialize(vec![product(9, "Late", "electronics")]));
        assert_eq!(store.len(), 3);
        assert_eq!(store.products()[0].title, "Backpack");
    }

    #[test]
    fn test_initialize_with_empty_catalog_still_counts() {
        let mut store = ProductStore::new();
        assert!(store.initialize(Vec::new()));
        assert!(store.is_seeded());
        assert!(store.is_empty());
        assert_eq!(store.category_options().len(), 1);
        assert_eq!(store.category_options()[0].label, "All");

        // Even the empty seed wins over later attempts
        assert!(!store.initialize(seed()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_prepends() {
        let mut store = ProductStore::new();
        store.initialize(seed());

        let first = DraftLike::new("Handmade Mug").into_product();
        let first_id = first.id;
        store.add(first);

        let second = DraftLike::new("Desk Lamp").into_product();
        let second_id = second.id;
        store.add(second);

        let titles: Vec<&str> = store
            .products()
            .iter()
            .map(|product| product.title.as_str())
            .collect();
        assert_eq!(
            titles,
            ["Desk Lamp", "Handmade Mug", "Backpack", "Gold Ring", "Rain Jacket"]
        );
        assert_eq!(store.products()[0].id, second_id);
        assert_eq!(store.products()[1].id, first_id);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = ProductStore::new();
        store.initialize(seed());

        let added = DraftLike::new("Handmade Mug").into_product();
        let added_id = added.id;
        store.add(added);

        assert_eq!(store.get(ProductId::Remote(2)).unwrap().title, "Gold Ring");
        assert_eq!(store.get(added_id).unwrap().title, "Handmade Mug");
        assert!(store.get(ProductId::Remote(404)).is_none());
    }

    #[test]
    fn test_category_options_come_from_seed_only() {
        let mut store = ProductStore::new();
        store.initialize(seed());

        let values: Vec<&str> = store
            .category_options()
            .iter()
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(values, ["", "men's clothing", "jewelery"]);

        // Adding a product in a brand-new category does not extend the options
        store.add(product(10, "Headphones", "electronics"));
        assert_eq!(store.category_options().len(), 3);
    }

    /// Minimal stand-in for a completed draft.
    struct DraftLike {
        title: String,
    }

    impl DraftLike {
        fn new(title: &str) -> Self {
            Self {
                title: title.to_owned(),
            }
        }

        fn into_product(self) -> Product {
            Product {
                id: ProductId::local(),
                title: self.title,
                price: Decimal::new(1500, 2),
                description: "locally added".to_owned(),
                category: "electronics".to_owned(),
                image: "/media/00000000-0000-0000-0000-000000000000".to_owned(),
                rating: Rating {
                    rate: Decimal::new(45, 1),
                    count: 1,
                },
            }
        }
    }
}
