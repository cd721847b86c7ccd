//! Products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CategoryRef, Entity, lenient_id};
use crate::types::{CategoryId, ProductId};

/// A product as returned by `GET /products`.
///
/// The API embeds a summary of the owning category; the id of that category
/// may be missing from list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Decimal,
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<CategoryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

impl Entity for Product {
    type Id = ProductId;
    const RESOURCE: &'static str = "products";

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Payload for `POST /products` and `PUT /products/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category_id: CategoryId,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_decodes_numeric_price_and_nested_category() {
        let product: Product = serde_json::from_str(
            r#"{"id":4,"name":"Hammer","description":"Steel hammer","price":150.5,
                "category_id":"2","category":{"category_name":"Tools"}}"#,
        )
        .unwrap();

        assert_eq!(product.price, Decimal::from_str("150.5").unwrap());
        assert_eq!(product.category_id, Some(CategoryId::new(2)));
        assert_eq!(
            product.category.map(|c| c.category_name).as_deref(),
            Some("Tools")
        );
    }

    #[test]
    fn test_decodes_without_category() {
        let product: Product =
            serde_json::from_str(r#"{"id":4,"name":"Hammer","price":"101"}"#).unwrap();
        assert!(product.category_id.is_none());
        assert!(product.category.is_none());
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_input_serializes_price_as_string() {
        let input = ProductInput {
            name: "Hammer".to_string(),
            description: "Steel hammer".to_string(),
            price: Decimal::from_str("100.01").unwrap(),
            category_id: CategoryId::new(2),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["price"], "100.01");
        assert_eq!(value["category_id"], 2);
    }
}
