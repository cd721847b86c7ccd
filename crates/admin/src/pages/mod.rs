//! Page controllers.
//!
//! A page owns its form record and mode label, drives the resource
//! containers, and turns every outcome into a [`Notice`]. Pages are cheap
//! values: the web layer builds one per request from the submitted form,
//! the CLI builds one per command.

pub mod cart;
pub mod categories;
pub mod products;
pub mod users;

pub use cart::CartPage;
pub use categories::{CategoriesPage, CategoryForm};
pub use products::{ProductForm, ProductsPage};
pub use users::{CsvFile, UserForm, UsersPage};

use std::fmt::Display;
use std::str::FromStr;

use askama::Template;
use serde::{Deserialize, Deserializer, de};

use crate::components::{DataTableConfig, TableColumn};
use crate::store::ActionError;

/// Minimum length of every validated text field, after trimming.
pub const MIN_TEXT_LEN: usize = 5;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    /// CSS modifier and CLI prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Modal notification shown after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    /// Generic success.
    #[must_use]
    pub fn success() -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Process completed".to_string(),
            text: String::new(),
        }
    }

    /// Success of an add-to-cart action.
    #[must_use]
    pub fn added_to_cart() -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Added to cart".to_string(),
            text: String::new(),
        }
    }

    /// A validation rule failed; nothing was sent.
    #[must_use]
    pub fn warning(rule: &str) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Warning".to_string(),
            text: rule.to_string(),
        }
    }

    /// A remote operation failed.
    #[must_use]
    pub fn error(message: &str) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Something went wrong".to_string(),
            text: message.to_string(),
        }
    }

    /// Whether the operation went through.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.level, NoticeLevel::Success)
    }
}

impl From<&ActionError> for Notice {
    fn from(err: &ActionError) -> Self {
        Self::error(err.message())
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.text.is_empty() {
            write!(f, "[{}] {}", self.level.as_str(), self.title)
        } else {
            write!(f, "[{}] {}: {}", self.level.as_str(), self.title, self.text)
        }
    }
}

/// Whether a trimmed text field passes the length rule.
pub(crate) fn long_enough(value: &str) -> bool {
    value.chars().count() >= MIN_TEXT_LEN
}

/// Deserialize an optional id from a form field, treating blank and `0` as absent.
pub(crate) fn optional_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("" | "0") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// One control in a row's action cell.
#[derive(Debug, Clone)]
pub struct RowAction {
    pub label: &'static str,
    pub href: String,
    /// Submit as a POST form instead of following a link.
    pub post: bool,
    pub style: &'static str,
}

impl RowAction {
    pub(crate) fn link(label: &'static str, href: String, style: &'static str) -> Self {
        Self {
            label,
            href,
            post: false,
            style,
        }
    }

    pub(crate) fn post(label: &'static str, href: String, style: &'static str) -> Self {
        Self {
            label,
            href,
            post: true,
            style,
        }
    }
}

#[derive(Template)]
#[template(path = "partials/row_actions.html")]
struct RowActionsTemplate<'a> {
    actions: &'a [RowAction],
}

/// Render the action cell of one table row.
pub(crate) fn render_actions(actions: &[RowAction]) -> String {
    RowActionsTemplate { actions }.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        String::new()
    })
}

/// Synthetic field the action fragment is stored under.
pub(crate) const ACTIONS_FIELD: &str = "actions";

/// Append the actions column when the caller renders controls.
pub(crate) fn with_actions(config: DataTableConfig, actions: bool) -> DataTableConfig {
    if actions {
        config.column(TableColumn::new(ACTIONS_FIELD, "Actions"))
    } else {
        config
    }
}
