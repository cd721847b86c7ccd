//! Entities managed through the remote shop API.
//!
//! Each entity is a flat record whose identity is assigned by the server.
//! The `*Input` types are the request payloads the admin sends on create
//! and update.

pub mod cart;
pub mod category;
pub mod product;
pub mod user;

pub use cart::{CartItem, CartProduct, NewCartItem};
pub use category::{Category, CategoryInput, CategoryRef};
pub use product::{Product, ProductInput};
pub use user::{NewUser, User};

use serde::{Deserialize, Deserializer};

/// A record held in a client-side collection, addressable by its id.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Type-safe id of the entity.
    type Id: Copy + Eq + std::fmt::Debug + std::fmt::Display + Send + Sync;

    /// Resource name used in log fields and messages (e.g. `categories`).
    const RESOURCE: &'static str;

    /// The server-assigned id.
    fn id(&self) -> Self::Id;
}

/// Deserialize an optional id that the API may send as a number or as a
/// numeric string.
pub(crate) fn lenient_id<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<i64>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Int(id)) => Ok(Some(T::from(id))),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text
            .trim()
            .parse::<i64>()
            .map(|id| Some(T::from(id)))
            .map_err(serde::de::Error::custom),
    }
}
