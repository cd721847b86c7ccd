//! Users page: single creation and CSV import.

use serde::Deserialize;
use silva_core::{NewUser, User};

use super::{Notice, long_enough};
use crate::api::ApiClient;
use crate::components::{DataTableConfig, RenderedTable, TableColumn, TableRow};
use crate::store::{ActionResult, ResourceState, UserStore};

/// Heading of the users page.
pub const LABEL: &str = "Create users";
const USER_RULE: &str = "You must enter a valid email, username and password";

/// User form record.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for UserForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserForm")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A CSV file chosen for import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub name: String,
    pub contents: Vec<u8>,
}

impl CsvFile {
    /// A browser submits an empty part when no file was chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.contents.is_empty()
    }
}

/// Users page controller.
#[derive(Debug, Clone, Default)]
pub struct UsersPage {
    form: UserForm,
}

impl UsersPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_form(form: UserForm) -> Self {
        Self { form }
    }

    #[must_use]
    pub const fn form(&self) -> &UserForm {
        &self.form
    }

    #[must_use]
    pub const fn mode_label(&self) -> &'static str {
        LABEL
    }

    pub fn clear(&mut self) {
        self.form = UserForm::default();
    }

    /// Fetch the user list.
    ///
    /// # Errors
    ///
    /// Returns the failure message recorded by the container.
    pub async fn mount(&self, store: &UserStore, api: &ApiClient) -> ActionResult<()> {
        store.fetch_all(api).await.map(|_| ())
    }

    /// Submit the page.
    ///
    /// A chosen CSV file wins over the text fields and skips their
    /// validation; otherwise the fields are trimmed, validated and a single
    /// user is created.
    pub async fn submit(
        &mut self,
        store: &UserStore,
        api: &ApiClient,
        csv: Option<CsvFile>,
    ) -> Notice {
        if let Some(file) = csv.filter(|file| !file.is_empty()) {
            return self.upload_csv(store, api, file).await;
        }

        self.form.email = self.form.email.trim().to_string();
        self.form.username = self.form.username.trim().to_string();
        self.form.password = self.form.password.trim().to_string();

        if !long_enough(&self.form.email)
            || !long_enough(&self.form.username)
            || !long_enough(&self.form.password)
        {
            return Notice::warning(USER_RULE);
        }

        let input = NewUser {
            username: self.form.username.clone(),
            email: self.form.email.clone(),
            password: self.form.password.clone(),
        };

        match store.create(api, &input).await {
            Ok(_) => {
                self.clear();
                Notice::success()
            }
            Err(err) => Notice::from(&err),
        }
    }

    /// Import a CSV file, replacing the user list with the server's answer.
    pub async fn upload_csv(&mut self, store: &UserStore, api: &ApiClient, file: CsvFile) -> Notice {
        match store.import_csv(api, &file.name, file.contents).await {
            Ok(users) => {
                tracing::info!(count = users.len(), "Users imported");
                self.clear();
                Notice::success()
            }
            Err(err) => Notice::from(&err),
        }
    }

    #[must_use]
    pub fn table(state: &ResourceState<User>) -> RenderedTable {
        let rows: Vec<TableRow> = state.items.iter().map(TableRow::from_record).collect();
        DataTableConfig::new("users")
            .column(TableColumn::new("id", "ID"))
            .column(TableColumn::new("username", "Username"))
            .column(TableColumn::new("email", "Email"))
            .empty_state("No users yet")
            .render(&rows, state.loading.is_pending())
    }
}
