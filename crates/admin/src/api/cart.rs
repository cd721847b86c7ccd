//! Cart endpoints.

use reqwest::Method;
use serde_json::{Value, json};
use silva_core::{CartItem, CartItemId, NewCartItem};
use tracing::instrument;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List the cart lines.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_cart(&self) -> Result<Vec<CartItem>, ApiError> {
        self.get("/cart").await
    }

    /// Add a product to the cart.
    ///
    /// The created line is decoded loosely; the cart page always refreshes
    /// the whole list on its own.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(product_id = %input.product_id))]
    pub async fn add_to_cart(&self, input: &NewCartItem) -> Result<Value, ApiError> {
        self.send(Method::POST, "/cart", input).await
    }

    /// Remove a cart line. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(cart_item_id = %id))]
    pub async fn remove_from_cart(&self, id: CartItemId) -> Result<(), ApiError> {
        let _: Value = self
            .send(Method::DELETE, &format!("/cart/{id}"), &json!({}))
            .await?;
        Ok(())
    }
}
