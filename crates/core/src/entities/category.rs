//! Product categories.

use serde::{Deserialize, Serialize};

use super::Entity;
use crate::types::CategoryId;

/// A category as returned by `GET /categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
}

impl Entity for Category {
    type Id = CategoryId;
    const RESOURCE: &'static str = "categories";

    fn id(&self) -> CategoryId {
        self.id
    }
}

/// Category summary embedded in products (`category.category_name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub category_name: String,
}

/// Payload for `POST /categories` and `PUT /categories/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
}
