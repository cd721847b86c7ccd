//! Category commands.

use silva_admin::pages::{CategoriesPage, CategoryForm};
use silva_core::CategoryId;

use super::{CommandError, Context, print_table, report};

/// Print the category table.
///
/// # Errors
///
/// Returns an error if the list could not be fetched.
pub async fn list(ctx: &Context) -> Result<(), CommandError> {
    let page = CategoriesPage::new();
    let mounted = page.mount(&ctx.store.categories, &ctx.api).await;
    print_table(
        &CategoriesPage::table(&ctx.store.categories.snapshot().await, false),
        mounted,
    )
}

/// Create a category, or rename one when `id` is given.
///
/// # Errors
///
/// Returns an error if validation fails or the API rejects the change.
pub async fn save(ctx: &Context, id: Option<CategoryId>, name: String) -> Result<(), CommandError> {
    let mut page = CategoriesPage::with_form(CategoryForm { id, name });
    tracing::debug!(label = page.mode_label(), "Submitting category");
    report(page.submit(&ctx.store.categories, &ctx.api).await)
}

/// Delete a category.
///
/// # Errors
///
/// Returns an error if the API rejects the deletion.
pub async fn delete(ctx: &Context, id: CategoryId) -> Result<(), CommandError> {
    let mut page = CategoriesPage::new();
    report(page.delete(&ctx.store.categories, &ctx.api, id).await)
}
