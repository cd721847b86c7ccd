//! Products page.

use rust_decimal::Decimal;
use serde::Deserialize;
use silva_core::{CategoryId, NewCartItem, Product, ProductId, ProductInput};

use super::{ACTIONS_FIELD, Notice, RowAction, long_enough, optional_id, render_actions, with_actions};
use crate::api::ApiClient;
use crate::components::{DataTableConfig, RenderedTable, TableColumn, TableRow};
use crate::store::{ActionResult, CartStore, CategoryStore, ProductStore, ResourceState};

const CREATE_LABEL: &str = "Product management";
const PRODUCT_RULE: &str =
    "You must select a category and enter a valid product name, description and price";

/// Maximum product description length accepted by the form.
pub const DESCRIPTION_MAX_LEN: usize = 100;

/// Product form record.
///
/// `price` and `category_id` hold the raw input; they are parsed only once
/// validation has passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductForm {
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub category_id: String,
}

impl ProductForm {
    fn trim(&mut self) {
        self.name = self.name.trim().to_string();
        self.description = self.description.trim().to_string();
        self.price = self.price.trim().to_string();
        self.category_id = self.category_id.trim().to_string();
    }

    /// Build the payload, or `None` when any rule fails.
    fn validate(&self) -> Option<ProductInput> {
        if !long_enough(&self.name)
            || !long_enough(&self.description)
            || self.description.chars().count() > DESCRIPTION_MAX_LEN
        {
            return None;
        }
        let price = parse_price(&self.price).filter(|price| *price > Decimal::ONE_HUNDRED)?;
        let category_id = self.category_id.parse::<CategoryId>().ok()?;

        Some(ProductInput {
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            category_id,
        })
    }
}

/// Parse a price field. Empty or non-numeric input yields `None`.
fn parse_price(raw: &str) -> Option<Decimal> {
    raw.trim().parse::<Decimal>().ok()
}

/// Products page controller.
#[derive(Debug, Clone)]
pub struct ProductsPage {
    form: ProductForm,
    label: String,
}

impl Default for ProductsPage {
    fn default() -> Self {
        Self {
            form: ProductForm::default(),
            label: CREATE_LABEL.to_string(),
        }
    }
}

impl ProductsPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A page holding a submitted form; the label follows its mode.
    #[must_use]
    pub fn with_form(form: ProductForm) -> Self {
        let label = if form.id.is_some() {
            update_label(&form.name)
        } else {
            CREATE_LABEL.to_string()
        };
        Self { form, label }
    }

    #[must_use]
    pub const fn form(&self) -> &ProductForm {
        &self.form
    }

    #[must_use]
    pub fn mode_label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn submit_caption(&self) -> &'static str {
        if self.form.id.is_some() {
            "Update product"
        } else {
            "Create product"
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Load a product into the form.
    pub fn edit(&mut self, product: &Product) {
        self.label = update_label(&product.name);
        self.form = ProductForm {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category_id: product
                .category_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        };
    }

    /// Fetch categories (for the dropdown) and products.
    ///
    /// Both fetches run; the first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns the failure message recorded by either container.
    pub async fn mount(
        &self,
        categories: &CategoryStore,
        products: &ProductStore,
        api: &ApiClient,
    ) -> ActionResult<()> {
        let (categories, products) =
            tokio::join!(categories.fetch_all(api), products.fetch_all(api));
        categories?;
        products?;
        Ok(())
    }

    /// Trim, validate and then create or update.
    pub async fn submit(&mut self, store: &ProductStore, api: &ApiClient) -> Notice {
        self.form.trim();

        let Some(input) = self.form.validate() else {
            return Notice::warning(PRODUCT_RULE);
        };

        let result = match self.form.id {
            Some(id) => store.update(api, id, &input).await,
            None => store.create(api, &input).await,
        };

        match result {
            Ok(_) => {
                self.clear();
                Notice::success()
            }
            Err(err) => Notice::from(&err),
        }
    }

    /// Delete a product; success also resets the form.
    pub async fn delete(&mut self, store: &ProductStore, api: &ApiClient, id: ProductId) -> Notice {
        match store.delete(api, id).await {
            Ok(_) => {
                self.clear();
                Notice::success()
            }
            Err(err) => Notice::from(&err),
        }
    }

    /// Put one unit of a product in the cart.
    pub async fn add_to_cart(&mut self, cart: &CartStore, api: &ApiClient, id: ProductId) -> Notice {
        match cart.create(api, &NewCartItem { product_id: id }).await {
            Ok(_) => {
                self.clear();
                Notice::added_to_cart()
            }
            Err(err) => Notice::from(&err),
        }
    }

    #[must_use]
    pub fn rows(items: &[Product]) -> Vec<TableRow> {
        items
            .iter()
            .map(|product| {
                let actions = render_actions(&[
                    RowAction::link("Edit", format!("/products/{}/edit", product.id), "primary"),
                    RowAction::post("Delete", format!("/products/{}/delete", product.id), "danger"),
                    RowAction::post("Add to cart", format!("/products/{}/cart", product.id), "accent"),
                ]);
                TableRow::from_record(product).with_fragment(ACTIONS_FIELD, actions)
            })
            .collect()
    }

    #[must_use]
    pub fn table(state: &ResourceState<Product>, actions: bool) -> RenderedTable {
        let config = DataTableConfig::new("products")
            .column(TableColumn::new("id", "ID"))
            .column(TableColumn::new("name", "Product"))
            .column(TableColumn::new("price", "Price"))
            .column(TableColumn::new("category.category_name", "Category"))
            .column(TableColumn::new("description", "Description"))
            .empty_state("No products yet");
        let rows = if actions {
            Self::rows(&state.items)
        } else {
            state.items.iter().map(TableRow::from_record).collect()
        };
        with_actions(config, actions).render(&rows, state.loading.is_pending())
    }
}

fn update_label(name: &str) -> String {
    format!("Update product {name}")
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::*;
    use crate::components::Cell;
    use crate::pages::NoticeLevel;
    use crate::store::test_support::{mock_api, unreachable_api};

    fn form(price: &str, category_id: &str) -> ProductForm {
        ProductForm {
            id: None,
            name: " Hammer ".to_string(),
            description: "Steel claw hammer".to_string(),
            price: price.to_string(),
            category_id: category_id.to_string(),
        }
    }

    #[test]
    fn test_price_boundary() {
        assert!(form("100", "1").validate().is_none());
        assert!(form("100.00", "1").validate().is_none());
        assert!(form("", "1").validate().is_none());
        assert!(form("cheap", "1").validate().is_none());

        let input = form("100.01", "1").validate().unwrap();
        assert_eq!(input.price.to_string(), "100.01");
    }

    #[test]
    fn test_category_must_be_selected() {
        assert!(form("150", "").validate().is_none());
        assert!(form("150", "abc").validate().is_none());
        assert_eq!(
            form("150", "3").validate().map(|input| input.category_id),
            Some(CategoryId::new(3))
        );
    }

    #[test]
    fn test_description_length_limit() {
        let mut at_limit = form("150", "1");
        at_limit.description = format!("  {}  ", "é".repeat(DESCRIPTION_MAX_LEN));
        at_limit.trim();
        assert_eq!(at_limit.name, "Hammer");
        assert!(at_limit.validate().is_some());

        let mut too_long = form("150", "1");
        too_long.description = "x".repeat(140);
        too_long.trim();
        assert_eq!(too_long.description.len(), 140);
        assert!(too_long.validate().is_none());
    }

    #[tokio::test]
    async fn test_long_description_warns_without_request() {
        let store = ProductStore::new();
        let mut long = form("150", "1");
        long.description = "x".repeat(DESCRIPTION_MAX_LEN + 1);
        let mut page = ProductsPage::with_form(long);

        let notice = page.submit(&store, &unreachable_api()).await;

        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(page.form().description.len(), DESCRIPTION_MAX_LEN + 1);
    }

    #[tokio::test]
    async fn test_invalid_submit_warns_without_request() {
        let store = ProductStore::new();
        let mut page = ProductsPage::with_form(form("100", "1"));

        let notice = page.submit(&store, &unreachable_api()).await;

        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.title, "Warning");
        assert_eq!(page.form().name, "Hammer");
    }

    #[tokio::test]
    async fn test_submit_sends_typed_payload() {
        let (server, api) = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/products"))
            .and(body_json(json!({
                "name": "Hammer",
                "description": "Steel claw hammer",
                "price": "150.5",
                "category_id": 2
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 11,
                "name": "Hammer",
                "description": "Steel claw hammer",
                "price": "150.50",
                "category_id": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let store = ProductStore::new();
        let mut page = ProductsPage::with_form(form("150.5", "2"));
        let notice = page.submit(&store, &api).await;

        assert!(notice.is_success());
        assert_eq!(store.items().await.len(), 1);
        assert_eq!(page.mode_label(), "Product management");
    }

    #[tokio::test]
    async fn test_add_to_cart_sends_only_product() {
        let (server, api) = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/cart"))
            .and(body_json(json!({"product_id": 11})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let cart = CartStore::new();
        let mut page = ProductsPage::new();
        let notice = page.add_to_cart(&cart, &api, ProductId::new(11)).await;

        assert_eq!(notice, Notice::added_to_cart());
        assert!(cart.items().await.is_empty());
    }

    #[tokio::test]
    async fn test_mount_fetches_both_collections() {
        let (server, api) = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Tools"}])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "db down"})))
            .expect(1)
            .mount(&server)
            .await;

        let categories = CategoryStore::new();
        let products = ProductStore::new();
        let err = ProductsPage::new()
            .mount(&categories, &products, &api)
            .await
            .unwrap_err();

        assert_eq!(err.message(), "db down");
        assert_eq!(categories.items().await.len(), 1);
    }

    #[test]
    fn test_edit_and_table() {
        let product: Product = serde_json::from_value(json!({
            "id": 5,
            "name": "Spade",
            "description": "Garden spade",
            "price": "120.00",
            "category_id": "2",
            "category": {"category_name": "Garden"}
        }))
        .unwrap();

        let mut page = ProductsPage::new();
        page.edit(&product);
        assert_eq!(page.mode_label(), "Update product Spade");
        assert_eq!(page.submit_caption(), "Update product");
        assert_eq!(page.form().price, "120.00");
        assert_eq!(page.form().category_id, "2");

        let state = ResourceState {
            items: vec![product],
            ..ResourceState::default()
        };
        let table = ProductsPage::table(&state, true);
        assert_eq!(table.rows[0][3], Cell::Text("Garden".to_string()));
        assert!(table.rows[0][5].content().contains("Add to cart"));
    }
}
