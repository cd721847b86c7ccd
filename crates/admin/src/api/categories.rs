//! Category endpoints.

use reqwest::Method;
use serde_json::{Value, json};
use silva_core::{Category, CategoryId, CategoryInput};
use tracing::instrument;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    /// Create a category.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self))]
    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, ApiError> {
        self.send(Method::POST, "/categories", input).await
    }

    /// Update a category.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, ApiError> {
        self.send(Method::PUT, &format!("/categories/{id}"), input)
            .await
    }

    /// Delete a category. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns error if the API request fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        let _: Value = self
            .send(Method::DELETE, &format!("/categories/{id}"), &json!({}))
            .await?;
        Ok(())
    }
}
