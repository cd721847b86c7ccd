//! Category container operations.

use silva_core::{Category, CategoryId, CategoryInput};

use super::{ActionResult, CategoryStore};
use crate::api::ApiClient;

impl CategoryStore {
    /// Fetch all categories, replacing the collection.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is emptied.
    pub async fn fetch_all(&self, api: &ApiClient) -> ActionResult<Vec<Category>> {
        self.refresh(api.list_categories()).await
    }

    /// Create a category and append the server's record.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is untouched.
    pub async fn create(&self, api: &ApiClient, input: &CategoryInput) -> ActionResult<Category> {
        self.mutate("create", api.create_category(input), |state, category| {
            state.items.push(category.clone());
        })
        .await
    }

    /// Update a category and replace it in place.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is untouched.
    pub async fn update(
        &self,
        api: &ApiClient,
        id: CategoryId,
        input: &CategoryInput,
    ) -> ActionResult<Category> {
        self.mutate("update", api.update_category(id, input), |state, category| {
            state.replace(category);
        })
        .await
    }

    /// Delete a category and drop it from the collection.
    ///
    /// # Errors
    ///
    /// Returns the failure message; the collection is untouched.
    pub async fn delete(&self, api: &ApiClient, id: CategoryId) -> ActionResult<CategoryId> {
        self.mutate(
            "delete",
            async { api.delete_category(id).await.map(|()| id) },
            |state, id| state.remove(*id),
        )
        .await
    }
}
