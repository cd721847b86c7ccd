//! End-to-end tests for the Silva admin.
//!
//! Each test starts the real admin router on an ephemeral port, pointed at a
//! `wiremock` server standing in for the shop API, and drives it over HTTP
//! with `reqwest`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p silva-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use reqwest::{Client, redirect::Policy};
use silva_admin::{app, config::AdminConfig, state::AppState};
use wiremock::MockServer;

/// A running admin instance wired to a mock shop API.
pub struct TestContext {
    /// HTTP client that does not follow redirects.
    pub client: Client,
    /// Root URL of the admin, e.g. `http://127.0.0.1:41234`.
    pub admin_url: String,
    /// The mock shop API.
    pub shop: MockServer,
    /// Shared state of the running admin, for container assertions.
    pub state: AppState,
}

impl TestContext {
    /// Start a mock shop API and an admin server in front of it.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound or the client cannot be built.
    #[allow(clippy::expect_used)]
    pub async fn new() -> Self {
        let shop = MockServer::start().await;
        let api_url = format!("{}/api", shop.uri());
        let config = AdminConfig::from_lookup(|key| (key == "API_BASE_URL").then(|| api_url.clone()))
            .expect("Failed to build test configuration");
        let state = AppState::new(config).expect("Failed to create application state");

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Listener has no address");

        let router = app(state.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let client = Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            admin_url: format!("http://{addr}"),
            shop,
            state,
        }
    }

    /// Absolute admin URL for a path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.admin_url)
    }
}
