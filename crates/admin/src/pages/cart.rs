//! Shopping cart page.

use silva_core::{CartItem, CartItemId};

use super::{ACTIONS_FIELD, Notice, RowAction, render_actions, with_actions};
use crate::api::ApiClient;
use crate::components::{DataTableConfig, RenderedTable, TableColumn, TableRow};
use crate::store::{ActionResult, CartStore, ResourceState};

/// Heading of the cart page.
pub const LABEL: &str = "Shopping cart";

/// Cart page controller. The cart has no form; lines are only removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartPage;

impl CartPage {
    #[must_use]
    pub const fn mode_label(self) -> &'static str {
        LABEL
    }

    /// Fetch the cart lines.
    ///
    /// # Errors
    ///
    /// Returns the failure message recorded by the container.
    pub async fn mount(self, store: &CartStore, api: &ApiClient) -> ActionResult<()> {
        store.fetch_all(api).await.map(|_| ())
    }

    /// Remove one cart line.
    pub async fn remove(self, store: &CartStore, api: &ApiClient, id: CartItemId) -> Notice {
        match store.delete(api, id).await {
            Ok(_) => Notice::success(),
            Err(err) => Notice::from(&err),
        }
    }

    #[must_use]
    pub fn rows(items: &[CartItem]) -> Vec<TableRow> {
        items
            .iter()
            .map(|line| {
                let actions = render_actions(&[RowAction::post(
                    "Remove",
                    format!("/cart/{}/delete", line.id),
                    "danger",
                )]);
                TableRow::from_record(line).with_fragment(ACTIONS_FIELD, actions)
            })
            .collect()
    }

    #[must_use]
    pub fn table(state: &ResourceState<CartItem>, actions: bool) -> RenderedTable {
        let config = DataTableConfig::new("cart")
            .column(TableColumn::new("id", "ID"))
            .column(TableColumn::new("product.product_name", "Product"))
            .column(TableColumn::new("product.category.category_name", "Category"))
            .column(TableColumn::new("product.price", "Price"))
            .column(TableColumn::new("quantity", "Quantity"))
            .empty_state("Your cart is empty");
        let rows = if actions {
            Self::rows(&state.items)
        } else {
            state.items.iter().map(TableRow::from_record).collect()
        };
        with_actions(config, actions).render(&rows, state.loading.is_pending())
    }
}
