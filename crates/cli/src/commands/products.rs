//! Product commands.

use silva_admin::pages::{ProductForm, ProductsPage};
use silva_core::ProductId;

use super::{CommandError, Context, print_table, report};

/// Raw product fields as typed on the command line.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: String,
}

/// Print the product table.
///
/// # Errors
///
/// Returns an error if either list could not be fetched.
pub async fn list(ctx: &Context) -> Result<(), CommandError> {
    let page = ProductsPage::new();
    let mounted = page
        .mount(&ctx.store.categories, &ctx.store.products, &ctx.api)
        .await;
    print_table(
        &ProductsPage::table(&ctx.store.products.snapshot().await, false),
        mounted,
    )
}

/// Create a product, or update one when `id` is given.
///
/// # Errors
///
/// Returns an error if validation fails or the API rejects the change.
pub async fn save(
    ctx: &Context,
    id: Option<ProductId>,
    fields: ProductFields,
) -> Result<(), CommandError> {
    let mut page = ProductsPage::with_form(ProductForm {
        id,
        name: fields.name,
        description: fields.description,
        price: fields.price,
        category_id: fields.category_id,
    });
    report(page.submit(&ctx.store.products, &ctx.api).await)
}

/// Delete a product.
///
/// # Errors
///
/// Returns an error if the API rejects the deletion.
pub async fn delete(ctx: &Context, id: ProductId) -> Result<(), CommandError> {
    let mut page = ProductsPage::new();
    report(page.delete(&ctx.store.products, &ctx.api, id).await)
}

/// Put one unit of a product in the cart.
///
/// # Errors
///
/// Returns an error if the API rejects the line.
pub async fn add_to_cart(ctx: &Context, id: ProductId) -> Result<(), CommandError> {
    let mut page = ProductsPage::new();
    report(page.add_to_cart(&ctx.store.cart, &ctx.api, id).await)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::*;
    use crate::commands::test_support::mock_context;

    fn fields(price: &str) -> ProductFields {
        ProductFields {
            name: "Claw hammer".to_string(),
            description: "Steel claw hammer".to_string(),
            price: price.to_string(),
            category_id: "3".to_string(),
        }
    }

    #[tokio::test]
    async fn test_price_at_minimum_is_rejected() {
        let (_server, ctx) = mock_context().await;
        let err = save(&ctx, None, fields("100")).await.unwrap_err();
        assert!(matches!(err, CommandError::Rejected(ref notice) if notice.title == "Warning"));
    }

    #[tokio::test]
    async fn test_create_and_add_to_cart() {
        let (server, ctx) = mock_context().await;
        Mock::given(method("POST"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 11,
                "name": "Claw hammer",
                "description": "Steel claw hammer",
                "price": "149.90",
                "category_id": 3
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/cart"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1, "product_id": 11})))
            .expect(1)
            .mount(&server)
            .await;

        save(&ctx, None, fields("149.90")).await.unwrap();
        add_to_cart(&ctx, ProductId::new(11)).await.unwrap();
        assert_eq!(ctx.store.products.items().await.len(), 1);
    }
}
