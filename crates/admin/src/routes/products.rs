//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::IntoResponse,
};
use silva_core::{Category, ProductId};
use tracing::instrument;

use crate::components::RenderedTable;
use crate::error::AppError;
use crate::pages::products::DESCRIPTION_MAX_LEN;
use crate::pages::{Notice, ProductForm, ProductsPage};
use crate::state::AppState;

/// Products page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/products.html")]
pub struct ProductsTemplate {
    pub current_path: &'static str,
    pub label: String,
    pub caption: &'static str,
    pub form: ProductForm,
    /// Dropdown options, as captured when the page is rendered.
    pub categories: Vec<Category>,
    pub description_max_len: usize,
    pub table: RenderedTable,
    pub load_error: Option<String>,
    pub notice: Option<Notice>,
}

impl ProductsTemplate {
    async fn new(state: &AppState, page: &ProductsPage, notice: Option<Notice>) -> Self {
        let store = state.store();
        let products = store.products.snapshot().await;
        let categories = store.categories.snapshot().await;

        Self {
            current_path: "/products",
            label: page.mode_label().to_string(),
            caption: page.submit_caption(),
            form: page.form().clone(),
            categories: categories.items,
            description_max_len: DESCRIPTION_MAX_LEN,
            table: ProductsPage::table(&products, true),
            load_error: products.error.or(categories.error),
            notice,
        }
    }
}

/// Products page handler. Fetches categories and products.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let page = ProductsPage::new();
    let store = state.store();
    let _ = page
        .mount(&store.categories, &store.products, state.api())
        .await;

    ProductsTemplate::new(&state, &page, None).await
}

/// Create or update a product.
#[instrument(skip(state))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> impl IntoResponse {
    let mut page = ProductsPage::with_form(form);
    let notice = page.submit(&state.store().products, state.api()).await;

    ProductsTemplate::new(&state, &page, Some(notice)).await
}

/// Load a product into the form.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<impl IntoResponse, AppError> {
    let mut page = ProductsPage::new();
    let store = state.store();

    if store.products.find(id).await.is_none() {
        page.mount(&store.categories, &store.products, state.api())
            .await?;
    }
    let product = store
        .products
        .find(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
    page.edit(&product);

    Ok(ProductsTemplate::new(&state, &page, None).await)
}

/// Delete a product.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> impl IntoResponse {
    let mut page = ProductsPage::new();
    let notice = page.delete(&state.store().products, state.api(), id).await;

    ProductsTemplate::new(&state, &page, Some(notice)).await
}

/// Add one unit of a product to the cart.
#[instrument(skip(state))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> impl IntoResponse {
    let mut page = ProductsPage::new();
    let notice = page.add_to_cart(&state.store().cart, state.api(), id).await;

    ProductsTemplate::new(&state, &page, Some(notice)).await
}
