//! Cart container operations.

use serde_json::Value;
use silva_core::{CartItem, CartItemId, NewCartItem};

use super::{ActionResult, CartStore};
use crate::api::ApiClient;

impl CartStore {
    /// Fetch the cart lines, replacing the collection.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is emptied.
    pub async fn fetch_all(&self, api: &ApiClient) -> ActionResult<Vec<CartItem>> {
        self.refresh(api.list_cart()).await
    }

    /// Add a product to the cart.
    ///
    /// The collection is not touched; the cart page re-lists on mount.
    ///
    /// # Errors
    ///
    /// Returns the failure message.
    pub async fn create(&self, api: &ApiClient, input: &NewCartItem) -> ActionResult<Value> {
        self.mutate("create", api.add_to_cart(input), |_, _| {}).await
    }

    /// Remove a cart line and drop it from the collection.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is untouched.
    pub async fn delete(&self, api: &ApiClient, id: CartItemId) -> ActionResult<CartItemId> {
        self.mutate(
            "delete",
            async { api.remove_from_cart(id).await.map(|()| id) },
            |state, id| state.remove(*id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use silva_core::{LoadStatus, ProductId};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::*;
    use crate::store::test_support::mock_api;

    fn line(id: i64) -> CartItem {
        CartItem {
            id: CartItemId::new(id),
            product_id: Some(ProductId::new(9)),
            quantity: 1,
            product: None,
        }
    }

    #[tokio::test]
    async fn test_deleting_only_item_empties_cart() {
        let (server, api) = mock_api().await;
        Mock::given(method("DELETE"))
            .and(path("/api/cart/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let store = CartStore::new();
        store.replace_items(vec![line(3)]).await;
        store.delete(&api, CartItemId::new(3)).await.unwrap();

        assert!(store.items().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_cart_unchanged() {
        let (server, api) = mock_api().await;
        Mock::given(method("DELETE"))
            .and(path("/api/cart/3"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not in cart"})))
            .mount(&server)
            .await;

        let store = CartStore::new();
        store.replace_items(vec![line(3)]).await;
        let err = store.delete(&api, CartItemId::new(3)).await.unwrap_err();

        assert_eq!(err.message(), "not in cart");
        assert_eq!(store.items().await, vec![line(3)]);
    }

    #[tokio::test]
    async fn test_create_sends_product_only_and_keeps_items() {
        let (server, api) = mock_api().await;
        Mock::given(method("POST"))
            .and(path("/api/cart"))
            .and(body_json(json!({"product_id": 9})))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"id": 4, "product_id": 9, "quantity": 1})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let store = CartStore::new();
        store.replace_items(vec![line(3)]).await;
        store
            .create(
                &api,
                &NewCartItem {
                    product_id: ProductId::new(9),
                },
            )
            .await
            .unwrap();

        let state = store.snapshot().await;
        assert_eq!(state.items, vec![line(3)]);
        assert_eq!(state.loading, LoadStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_failed_fetch_clears_items() {
        let (server, api) = mock_api().await;
        Mock::given(method("GET"))
            .and(path("/api/cart"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!("cart unavailable")))
            .mount(&server)
            .await;

        let store = CartStore::new();
        store.replace_items(vec![line(3)]).await;
        let err = store.fetch_all(&api).await.unwrap_err();

        assert_eq!(err.message(), "cart unavailable");
        assert!(store.items().await.is_empty());
    }
}
