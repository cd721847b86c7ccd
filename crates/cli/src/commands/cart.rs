//! Cart commands.

use silva_admin::pages::CartPage;
use silva_core::CartItemId;

use super::{CommandError, Context, print_table, report};

/// Print the cart lines.
///
/// # Errors
///
/// Returns an error if the list could not be fetched.
pub async fn list(ctx: &Context) -> Result<(), CommandError> {
    let mounted = CartPage.mount(&ctx.store.cart, &ctx.api).await;
    print_table(&CartPage::table(&ctx.store.cart.snapshot().await, false), mounted)
}

/// Remove a cart line.
///
/// # Errors
///
/// Returns an error if the API rejects the removal.
pub async fn remove(ctx: &Context, id: CartItemId) -> Result<(), CommandError> {
    report(CartPage.remove(&ctx.store.cart, &ctx.api, id).await)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::*;
    use crate::commands::test_support::mock_context;

    #[tokio::test]
    async fn test_list_and_remove() {
        let (server, ctx) = mock_context().await;
        Mock::given(method("GET"))
            .and(path("/api/cart"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 4, "product_id": 11, "quantity": 1, "product": {"product_name": "Hammer"}}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/cart/4"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        list(&ctx).await.unwrap();
        remove(&ctx, CartItemId::new(4)).await.unwrap();
        assert!(ctx.store.cart.items().await.is_empty());
    }
}
