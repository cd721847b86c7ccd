//! Client-side resource containers.
//!
//! Each container owns one entity collection, its [`LoadStatus`] and the
//! message of the last failure. Every operation follows the same three
//! phases:
//!
//! 1. start: `loading = Pending`, `error = None`
//! 2. remote call through [`ApiClient`]
//! 3. success reduces the result into the collection and sets `Succeeded`;
//!    failure records the message and sets `Failed`
//!
//! The lock is released while the remote call is in flight, so two
//! overlapping operations on the same container race and whichever lands
//! last wins. Nothing is de-duplicated or cancelled.
//!
//! A failed *list* also empties the collection: stale rows are dropped
//! rather than kept next to an error.

mod cart;
mod categories;
mod products;
mod users;

use std::future::Future;
use std::sync::Arc;

use silva_core::{CartItem, Category, Entity, LoadStatus, Product, User};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::api::ApiError;

/// Failure of a container operation.
///
/// Carries exactly one message: the one normalized by the transport, or a
/// fallback when the failure had nothing to say.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ActionError {
    message: String,
}

impl ActionError {
    /// Create an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Convert a transport error, using `fallback` when it carries no text.
    #[must_use]
    pub fn from_api(err: ApiError, fallback: &str) -> Self {
        let message = match err {
            ApiError::Status { message, .. } => message,
            other => other.to_string(),
        };

        if message.trim().is_empty() {
            Self::new(fallback)
        } else {
            Self { message }
        }
    }

    /// The message shown to the operator.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of a container operation.
pub type ActionResult<T> = Result<T, ActionError>;

/// Snapshot of one resource collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub loading: LoadStatus,
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: LoadStatus::Idle,
            error: None,
        }
    }
}

impl<T: Entity> ResourceState<T> {
    fn start(&mut self) {
        self.loading = LoadStatus::Pending;
        self.error = None;
    }

    fn fail(&mut self, message: &str) {
        self.loading = LoadStatus::Failed;
        self.error = Some(message.to_string());
    }

    /// Find an entity by id.
    #[must_use]
    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Replace the entity with the same id in place. No match is a no-op.
    fn replace(&mut self, updated: &T) {
        if let Some(slot) = self.items.iter_mut().find(|item| item.id() == updated.id()) {
            *slot = updated.clone();
        }
    }

    fn remove(&mut self, id: T::Id) {
        self.items.retain(|item| item.id() != id);
    }
}

/// Shared container for one entity kind.
///
/// Cheap to clone; clones observe the same state.
#[derive(Debug)]
pub struct ResourceStore<T> {
    state: Arc<RwLock<ResourceState<T>>>,
}

impl<T> Clone for ResourceStore<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> Default for ResourceStore<T> {
    fn default() -> Self {
        Self {
            state: Arc::new(RwLock::new(ResourceState::default())),
        }
    }
}

/// Container of users.
pub type UserStore = ResourceStore<User>;
/// Container of categories.
pub type CategoryStore = ResourceStore<Category>;
/// Container of products.
pub type ProductStore = ResourceStore<Product>;
/// Container of cart lines.
pub type CartStore = ResourceStore<CartItem>;

impl<T: Entity> ResourceStore<T> {
    /// Create an empty, idle container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone the current state for rendering.
    pub async fn snapshot(&self) -> ResourceState<T> {
        self.state.read().await.clone()
    }

    /// Clone the current items.
    pub async fn items(&self) -> Vec<T> {
        self.state.read().await.items.clone()
    }

    /// Look up an entity by id in the current items.
    pub async fn find(&self, id: T::Id) -> Option<T> {
        self.state.read().await.find(id).cloned()
    }

    /// Replace the collection wholesale without touching the loading state.
    pub async fn replace_items(&self, items: Vec<T>) {
        self.state.write().await.items = items;
    }

    /// Fetch the whole collection and replace `items` with it.
    ///
    /// On failure the collection is emptied.
    async fn refresh<Fut>(&self, call: Fut) -> ActionResult<Vec<T>>
    where
        Fut: Future<Output = Result<Vec<T>, ApiError>>,
    {
        self.state.write().await.start();

        match call.await {
            Ok(items) => {
                debug!(resource = T::RESOURCE, count = items.len(), "List refreshed");
                let mut state = self.state.write().await;
                state.items.clone_from(&items);
                state.loading = LoadStatus::Succeeded;
                Ok(items)
            }
            Err(err) => {
                let error = ActionError::from_api(err, &fallback_message("list", T::RESOURCE));
                warn!(resource = T::RESOURCE, error = %error, "List failed");
                let mut state = self.state.write().await;
                state.fail(error.message());
                state.items.clear();
                Err(error)
            }
        }
    }

    /// Run a mutating call and reduce its result into the collection.
    async fn mutate<R, Fut, F>(&self, operation: &str, call: Fut, reduce: F) -> ActionResult<R>
    where
        Fut: Future<Output = Result<R, ApiError>>,
        F: FnOnce(&mut ResourceState<T>, &R),
    {
        self.state.write().await.start();

        match call.await {
            Ok(value) => {
                debug!(resource = T::RESOURCE, operation, "Operation succeeded");
                let mut state = self.state.write().await;
                reduce(&mut state, &value);
                state.loading = LoadStatus::Succeeded;
                Ok(value)
            }
            Err(err) => {
                let error = ActionError::from_api(err, &fallback_message(operation, T::RESOURCE));
                warn!(resource = T::RESOURCE, operation, error = %error, "Operation failed");
                self.state.write().await.fail(error.message());
                Err(error)
            }
        }
    }
}

fn fallback_message(operation: &str, resource: &str) -> String {
    format!("Unknown error while trying to {operation} {resource}")
}

/// All resource containers of the admin, owned by the composition root.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub users: UserStore,
    pub categories: CategoryStore,
    pub products: ProductStore,
    pub cart: CartStore,
}

impl Store {
    /// Create a store with every container idle and empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
