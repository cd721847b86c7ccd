//! Categories page.

use serde::Deserialize;
use silva_core::{Category, CategoryId, CategoryInput};

use super::{ACTIONS_FIELD, Notice, RowAction, long_enough, optional_id, render_actions, with_actions};
use crate::api::ApiClient;
use crate::components::{DataTableConfig, RenderedTable, TableColumn, TableRow};
use crate::store::{ActionResult, CategoryStore, ResourceState};

const CREATE_LABEL: &str = "Create categories";
const NAME_RULE: &str = "You must enter a valid category name";

/// Category form record. `id` is set while editing an existing category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryForm {
    #[serde(default, deserialize_with = "optional_id")]
    pub id: Option<CategoryId>,
    #[serde(default)]
    pub name: String,
}

/// Categories page controller.
#[derive(Debug, Clone)]
pub struct CategoriesPage {
    form: CategoryForm,
    label: String,
}

impl Default for CategoriesPage {
    fn default() -> Self {
        Self {
            form: CategoryForm::default(),
            label: CREATE_LABEL.to_string(),
        }
    }
}

impl CategoriesPage {
    /// A page in create mode with an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A page holding a submitted form; the label follows its mode.
    #[must_use]
    pub fn with_form(form: CategoryForm) -> Self {
        let label = if form.id.is_some() {
            update_label(&form.name)
        } else {
            CREATE_LABEL.to_string()
        };
        Self { form, label }
    }

    #[must_use]
    pub const fn form(&self) -> &CategoryForm {
        &self.form
    }

    #[must_use]
    pub fn mode_label(&self) -> &str {
        &self.label
    }

    /// Caption of the submit button.
    #[must_use]
    pub const fn submit_caption(&self) -> &'static str {
        if self.form.id.is_some() {
            "Update category"
        } else {
            "Create category"
        }
    }

    /// Reset the form and return to create mode.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Load a category into the form.
    pub fn edit(&mut self, category: &Category) {
        self.label = update_label(&category.name);
        self.form = CategoryForm {
            id: Some(category.id),
            name: category.name.clone(),
        };
    }

    /// Fetch the category list.
    ///
    /// # Errors
    ///
    /// Returns the failure message recorded by the container.
    pub async fn mount(&self, store: &CategoryStore, api: &ApiClient) -> ActionResult<()> {
        store.fetch_all(api).await.map(|_| ())
    }

    /// Trim, validate and then create or update.
    pub async fn submit(&mut self, store: &CategoryStore, api: &ApiClient) -> Notice {
        self.form.name = self.form.name.trim().to_string();

        if !long_enough(&self.form.name) {
            return Notice::warning(NAME_RULE);
        }

        let input = CategoryInput {
            name: self.form.name.clone(),
        };
        let result = match self.form.id {
            Some(id) => store.update(api, id, &input).await,
            None => store.create(api, &input).await,
        };

        match result {
            Ok(_) => {
                self.clear();
                Notice::success()
            }
            Err(err) => Notice::from(&err),
        }
    }

    /// Delete a category; success also resets the form.
    pub async fn delete(&mut self, store: &CategoryStore, api: &ApiClient, id: CategoryId) -> Notice {
        match store.delete(api, id).await {
            Ok(_) => {
                self.clear();
                Notice::success()
            }
            Err(err) => Notice::from(&err),
        }
    }

    /// Table rows with edit and delete controls.
    #[must_use]
    pub fn rows(items: &[Category]) -> Vec<TableRow> {
        items
            .iter()
            .map(|category| {
                let actions = render_actions(&[
                    RowAction::link("Edit", format!("/categories/{}/edit", category.id), "primary"),
                    RowAction::post("Delete", format!("/categories/{}/delete", category.id), "danger"),
                ]);
                TableRow::from_record(category).with_fragment(ACTIONS_FIELD, actions)
            })
            .collect()
    }

    /// Render the category table from a container snapshot.
    #[must_use]
    pub fn table(state: &ResourceState<Category>, actions: bool) -> RenderedTable {
        let config = DataTableConfig::new("categories")
            .column(TableColumn::new("id", "ID"))
            .column(TableColumn::new("name", "Category"))
            .empty_state("No categories yet");
        let rows = if actions {
            Self::rows(&state.items)
        } else {
            state.items.iter().map(TableRow::from_record).collect()
        };
        with_actions(config, actions).render(&rows, state.loading.is_pending())
    }
}

fn update_label(name: &str) -> String {
    format!("Update category {name}")
}
