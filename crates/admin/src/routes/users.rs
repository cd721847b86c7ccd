//! User route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, State},
    response::IntoResponse,
};
use silva_core::User;
use tracing::instrument;

use crate::api::CSV_FIELD;
use crate::components::RenderedTable;
use crate::error::AppError;
use crate::pages::{CsvFile, Notice, UserForm, UsersPage};
use crate::state::AppState;
use crate::store::ResourceState;

/// Users page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/users.html")]
pub struct UsersTemplate {
    pub current_path: &'static str,
    pub label: &'static str,
    pub form: UserForm,
    pub table: RenderedTable,
    pub load_error: Option<String>,
    pub notice: Option<Notice>,
}

impl UsersTemplate {
    fn new(page: &UsersPage, snapshot: &ResourceState<User>, notice: Option<Notice>) -> Self {
        Self {
            current_path: "/users",
            label: page.mode_label(),
            form: page.form().clone(),
            table: UsersPage::table(snapshot),
            load_error: snapshot.error.clone(),
            notice,
        }
    }
}

/// Users page handler.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let page = UsersPage::new();
    let store = &state.store().users;
    // A failure is recorded in the container and shown above the table.
    let _ = page.mount(store, state.api()).await;

    UsersTemplate::new(&page, &store.snapshot().await, None)
}

/// Create a single user from the URL-encoded form.
#[instrument(skip(state, form))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> impl IntoResponse {
    let mut page = UsersPage::with_form(form);
    let store = &state.store().users;
    let notice = page.submit(store, state.api(), None).await;

    UsersTemplate::new(&page, &store.snapshot().await, Some(notice))
}

/// Multipart submission: a chosen CSV file is imported, otherwise the text
/// fields create a single user.
#[instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut form = UserForm::default();
    let mut csv = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        if name == CSV_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let contents = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            csv = Some(CsvFile {
                name: file_name,
                contents: contents.to_vec(),
            });
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        match name.as_str() {
            "email" => form.email = value,
            "username" => form.username = value,
            "password" => form.password = value,
            _ => tracing::debug!(field = %name, "Ignoring unknown upload field"),
        }
    }

    let mut page = UsersPage::with_form(form);
    let store = &state.store().users;
    let notice = page.submit(store, state.api(), csv).await;

    Ok(UsersTemplate::new(&page, &store.snapshot().await, Some(notice)))
}
