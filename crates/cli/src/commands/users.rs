//! User commands.

use std::path::Path;

use silva_admin::pages::{CsvFile, UserForm, UsersPage};

use super::{CommandError, Context, print_table, report};

/// Print the user table.
///
/// # Errors
///
/// Returns an error if the list could not be fetched.
pub async fn list(ctx: &Context) -> Result<(), CommandError> {
    let page = UsersPage::new();
    let mounted = page.mount(&ctx.store.users, &ctx.api).await;
    print_table(&UsersPage::table(&ctx.store.users.snapshot().await), mounted)
}

/// Create one user.
///
/// # Errors
///
/// Returns an error if validation fails or the API rejects the user.
pub async fn create(
    ctx: &Context,
    username: String,
    email: String,
    password: String,
) -> Result<(), CommandError> {
    let mut page = UsersPage::with_form(UserForm {
        email,
        username,
        password,
    });
    report(page.submit(&ctx.store.users, &ctx.api, None).await)
}

/// Import users from a CSV file and print the resulting list.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the import fails.
pub async fn import(ctx: &Context, path: &Path) -> Result<(), CommandError> {
    let contents = tokio::fs::read(path).await.map_err(|source| CommandError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let name = path
        .file_name()
        .map_or_else(|| "users.csv".to_string(), |name| name.to_string_lossy().into_owned());

    let mut page = UsersPage::new();
    let notice = page
        .upload_csv(&ctx.store.users, &ctx.api, CsvFile { name, contents })
        .await;
    report(notice)?;
    print_table(&UsersPage::table(&ctx.store.users.snapshot().await), Ok(()))
}
