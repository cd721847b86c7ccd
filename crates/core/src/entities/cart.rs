//! Shopping cart items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CategoryRef, Entity, lenient_id};
use crate::types::{CartItemId, ProductId};

/// A cart line as returned by `GET /cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_id: Option<ProductId>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<CartProduct>,
}

/// Product summary embedded in a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
    #[serde(default)]
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

impl Entity for CartItem {
    type Id = CartItemId;
    const RESOURCE: &'static str = "cart";

    fn id(&self) -> CartItemId {
        self.id
    }
}

/// Payload for `POST /cart`. Only the product reference is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub product_id: ProductId,
}
