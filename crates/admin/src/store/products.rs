//! Product container operations.

use silva_core::{Product, ProductId, ProductInput};

use super::{ActionResult, ProductStore};
use crate::api::ApiClient;

impl ProductStore {
    /// Fetch all products, replacing the collection.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is emptied.
    pub async fn fetch_all(&self, api: &ApiClient) -> ActionResult<Vec<Product>> {
        self.refresh(api.list_products()).await
    }

    /// Create a product and append the server's record.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is untouched.
    pub async fn create(&self, api: &ApiClient, input: &ProductInput) -> ActionResult<Product> {
        self.mutate("create", api.create_product(input), |state, product| {
            state.items.push(product.clone());
        })
        .await
    }

    /// Update a product and replace it in place.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is untouched.
    pub async fn update(
        &self,
        api: &ApiClient,
        id: ProductId,
        input: &ProductInput,
    ) -> ActionResult<Product> {
        self.mutate("update", api.update_product(id, input), |state, product| {
            state.replace(product);
        })
        .await
    }

    /// Delete a product and drop it from the collection.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is untouched.
    pub async fn delete(&self, api: &ApiClient, id: ProductId) -> ActionResult<ProductId> {
        self.mutate(
            "delete",
            async { api.delete_product(id).await.map(|()| id) },
            |state, id| state.remove(*id),
        )
        .await
    }
}
