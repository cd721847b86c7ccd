//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::config::AdminConfig;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It is the composition root
/// of the admin: one API client and one set of resource containers, shared
/// by every request.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    api: ApiClient,
    store: Store,
}

impl AppState {
    /// Create a new application state with empty containers.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client cannot be built for the configured URL.
    pub fn new(config: AdminConfig) -> Result<Self, ApiError> {
        let api = ApiClient::new(config.api_base_url.as_str())?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                store: Store::new(),
            }),
        })
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the shop API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Get a reference to the resource containers.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("api", &self.inner.api)
            .finish_non_exhaustive()
    }
}
