//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, Query, State},
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use storeroom_core::{
    CategoryOption, DraftField, DraftProduct, FilterCriteria, Product, ProductForm, ProductId,
    ValidationErrors, filter_products,
};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Categories offered in the create form.
///
/// This is the upstream catalog's fixed category set, "jewelery" spelling
/// included, independent of which categories the seed happened to contain.
const CREATE_CATEGORIES: [&str; 4] = [
    "electronics",
    "men's clothing",
    "women's clothing",
    "jewelery",
];

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub rating_rate: String,
    pub rating_count: u64,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            category: product.category.clone(),
            price: format_price(product.price),
            description: product.description.clone(),
            image: product.image.clone(),
            rating_rate: product.rating.rate.to_string(),
            rating_count: product.rating.count,
        }
    }
}

/// Filter query parameters for the product list.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductFilterQuery {
    /// Title search text.
    #[serde(rename = "q")]
    pub search: String,
    /// Exact category; empty selects all.
    pub category: String,
    /// Inclusive price ceiling, raw text.
    pub max_price: String,
}

impl ProductFilterQuery {
    fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            search_query: self.search,
            category: self.category,
            max_price: self.max_price,
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
    pub category_options: Vec<CategoryOption>,
    pub criteria: FilterCriteria,
}

/// Product detail modal fragment.
#[derive(Template, WebTemplate)]
#[template(path = "products/detail_modal.html")]
pub struct ProductDetailTemplate {
    pub product: ProductView,
}

/// Create-product modal fragment.
#[derive(Template, WebTemplate)]
#[template(path = "products/create_modal.html")]
pub struct CreateProductTemplate {
    pub values: DraftProduct,
    pub errors: ValidationErrors,
    pub category_choices: Vec<CategoryOption>,
}

/// Display the product list page, filtered by the query parameters.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductFilterQuery>,
) -> Result<impl IntoResponse> {
    let criteria = query.into_criteria();

    let (products, category_options) = {
        let store = state
            .store()
            .read()
            .map_err(|_| AppError::Internal("product store lock poisoned".to_string()))?;
        let products: Vec<ProductView> = filter_products(store.products(), &criteria)
            .into_iter()
            .map(ProductView::from)
            .collect();
        (products, store.category_options().to_vec())
    };

    Ok(ProductsIndexTemplate {
        products,
        category_options,
        criteria,
    })
}

/// Display the product detail modal fragment.
#[instrument(skip(state))]
pub async fn detail_modal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let product_id = id
        .parse::<ProductId>()
        .map_err(|_| AppError::NotFound(format!("product {id}")))?;

    let product = {
        let store = state
            .store()
            .read()
            .map_err(|_| AppError::Internal("product store lock poisoned".to_string()))?;
        store
            .get(product_id)
            .map(ProductView::from)
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))?
    };

    Ok(ProductDetailTemplate { product })
}

/// Display the create-product modal fragment with a pristine form.
pub async fn new_modal() -> impl IntoResponse {
    CreateProductTemplate {
        values: DraftProduct::default(),
        errors: ValidationErrors::default(),
        category_choices: create_category_options(),
    }
}

/// Handle the create-product form submission.
///
/// Fields arrive as a multipart form and are applied to the draft in
/// order. A picked image file is stored in the media store and its
/// reference overrides the carried `image` value; without a new file the
/// hidden `image` field keeps whatever reference an earlier attempt
/// stored. On success the product is prepended to the catalog and the
/// client is sent back to the list via `HX-Redirect`; on validation
/// failure the modal is re-rendered with messages (200, so HTMX swaps it).
#[instrument(skip(state, multipart))]
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response> {
    let mut form = ProductForm::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };

        if name == "image_file" {
            let has_file = field.file_name().is_some_and(|file_name| !file_name.is_empty());
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_owned();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?;

            // An empty file input still submits a part; keep the carried
            // reference in that case.
            if has_file && !bytes.is_empty() {
                let reference = state.media().store(content_type, bytes)?;
                form.set_image(reference);
            }
        } else if let Some(draft_field) = DraftField::parse(&name) {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?;
            form.set(draft_field, value);
        }
    }

    match form.submit() {
        Some(product) => {
            tracing::info!(id = %product.id, title = %product.title, "Product created");

            {
                let mut store = state
                    .store()
                    .write()
                    .map_err(|_| AppError::Internal("product store lock poisoned".to_string()))?;
                store.add(product);
            }

            Ok(([("HX-Redirect", "/")], "").into_response())
        }
        None => {
            let (values, errors) = form.into_parts();
            Ok(CreateProductTemplate {
                values,
                errors,
                category_choices: create_category_options(),
            }
            .into_response())
        }
    }
}

/// Format a decimal price for display.
fn format_price(price: Decimal) -> String {
    format!("${price:.2}")
}

fn create_category_options() -> Vec<CategoryOption> {
    CREATE_CATEGORIES
        .iter()
        .map(|category| CategoryOption::new(*category, *category))
        .collect()
}
