//! Category route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::IntoResponse,
};
use silva_core::{Category, CategoryId};
use tracing::instrument;

use crate::components::RenderedTable;
use crate::error::AppError;
use crate::pages::{CategoriesPage, CategoryForm, Notice};
use crate::state::AppState;
use crate::store::ResourceState;

/// Categories page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/categories.html")]
pub struct CategoriesTemplate {
    pub current_path: &'static str,
    pub label: String,
    pub caption: &'static str,
    pub form: CategoryForm,
    pub table: RenderedTable,
    pub load_error: Option<String>,
    pub notice: Option<Notice>,
}

impl CategoriesTemplate {
    fn new(page: &CategoriesPage, snapshot: &ResourceState<Category>, notice: Option<Notice>) -> Self {
        Self {
            current_path: "/categories",
            label: page.mode_label().to_string(),
            caption: page.submit_caption(),
            form: page.form().clone(),
            table: CategoriesPage::table(snapshot, true),
            load_error: snapshot.error.clone(),
            notice,
        }
    }
}

/// Categories page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let page = CategoriesPage::new();
    let store = &state.store().categories;
    let _ = page.mount(store, state.api()).await;

    CategoriesTemplate::new(&page, &store.snapshot().await, None)
}

/// Create or update a category.
#[instrument(skip(state))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> impl IntoResponse {
    let mut page = CategoriesPage::with_form(form);
    let store = &state.store().categories;
    let notice = page.submit(store, state.api()).await;

    CategoriesTemplate::new(&page, &store.snapshot().await, Some(notice))
}

/// Load a category into the form.
///
/// The container is refreshed first when it does not hold the category.
#[instrument(skip(state))]
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<impl IntoResponse, AppError> {
    let mut page = CategoriesPage::new();
    let store = &state.store().categories;

    if store.find(id).await.is_none() {
        page.mount(store, state.api()).await?;
    }
    let category = store
        .find(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("category {id}")))?;
    page.edit(&category);

    Ok(CategoriesTemplate::new(&page, &store.snapshot().await, None))
}

/// Delete a category.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> impl IntoResponse {
    let mut page = CategoriesPage::new();
    let store = &state.store().categories;
    let notice = page.delete(store, state.api(), id).await;

    CategoriesTemplate::new(&page, &store.snapshot().await, Some(notice))
}
