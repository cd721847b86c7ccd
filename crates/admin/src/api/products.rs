//! Product endpoints.

use reqwest::Method;
use serde_json::{Value, json};
use silva_core::{Product, ProductId, ProductInput};
use tracing::instrument;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List all products, each with its category summary.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/products").await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, ApiError> {
        self.send(Method::POST, "/products", input).await
    }

    /// Update a product.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        input: &ProductInput,
    ) -> Result<Product, ApiError> {
        self.send(Method::PUT, &format!("/products/{id}"), input)
            .await
    }

    /// Delete a product. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let _: Value = self
            .send(Method::DELETE, &format!("/products/{id}"), &json!({}))
            .await?;
        Ok(())
    }
}
