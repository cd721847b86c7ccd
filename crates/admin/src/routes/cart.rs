//! Cart route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use silva_core::CartItemId;
use tracing::instrument;

use crate::components::RenderedTable;
use crate::pages::{CartPage, Notice};
use crate::state::AppState;

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/cart.html")]
pub struct CartTemplate {
    pub current_path: &'static str,
    pub label: &'static str,
    pub table: RenderedTable,
    pub load_error: Option<String>,
    pub notice: Option<Notice>,
}

impl CartTemplate {
    async fn new(state: &AppState, notice: Option<Notice>) -> Self {
        let snapshot = state.store().cart.snapshot().await;
        Self {
            current_path: "/cart",
            label: CartPage.mode_label(),
            table: CartPage::table(&snapshot, true),
            load_error: snapshot.error,
            notice,
        }
    }
}

/// Cart page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let _ = CartPage.mount(&state.store().cart, state.api()).await;

    CartTemplate::new(&state, None).await
}

/// Remove a cart line.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<CartItemId>,
) -> impl IntoResponse {
    let notice = CartPage.remove(&state.store().cart, state.api(), id).await;

    CartTemplate::new(&state, Some(notice)).await
}
