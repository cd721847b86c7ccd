//! Silva Admin library.
//!
//! Back-office for the Silva shop: manages users, categories, products and
//! the shopping cart through the shop's REST API. Nothing is persisted
//! locally; every page reflects the in-memory containers, which are filled
//! from the API.
//!
//! # Layers
//!
//! - [`api`] - REST transport and error normalization
//! - [`store`] - per-resource containers (items, loading status, last error)
//! - [`pages`] - form records, validation and notices
//! - [`components`] - the data table renderer
//! - [`routes`] - axum handlers and askama templates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;
pub mod store;

use axum::{Router, routing::get};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Build the admin router with health check, pages and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the shop API.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::AdminConfig;

    async fn test_app() -> (MockServer, AppState, Router) {
        let server = MockServer::start().await;
        let api_url = format!("{}/api", server.uri());
        let config = AdminConfig::from_lookup(|key| (key == "API_BASE_URL").then(|| api_url.clone())).unwrap();
        let state = AppState::new(config).unwrap();
        let router = app(state.clone());
        (server, state, router)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (_server, _state, router) = test_app().await;
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_root_and_unknown_paths_redirect_to_users() {
        let (_server, _state, router) = test_app().await;

        for uri in ["/", "/nowhere/at/all"] {
            let response = router
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[header::LOCATION], "/users");
        }
    }

    #[tokio::test]
    async fn test_categories_page_lists_rows() {
        let (server, _state, router) = test_app().await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Tools & Hardware"}])))
            .mount(&server)
            .await;

        let response = router
            .oneshot(Request::get("/categories").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Create categories"));
        assert!(html.contains("Tools &#38; Hardware"));
        assert!(!html.contains("Tools & Hardware"));
        assert!(html.contains(">Edit</a>"));
    }

    #[tokio::test]
    async fn test_category_submit_renders_notice_without_refetch() {
        let (server, state, router) = test_app().await;
        Mock::given(method("POST"))
            .and(path("/api/categories"))
            .and(body_json(json!({"name": "Tools"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7, "name": "Tools"})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let response = router
            .oneshot(form_post("/categories", "id=&name=++Tools+"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Process completed"));
        assert!(html.contains("Create category"));
        assert_eq!(state.store().categories.items().await.len(), 1);
    }

    #[tokio::test]
    async fn test_short_category_name_warns() {
        let (_server, _state, router) = test_app().await;
        let response = router
            .oneshot(form_post("/categories", "name=Tool"))
            .await
            .unwrap();

        let html = body_text(response).await;
        assert!(html.contains("notice-warning"));
        assert!(html.contains("You must enter a valid category name"));
    }

    #[tokio::test]
    async fn test_edit_unknown_category_is_not_found() {
        let (server, _state, router) = test_app().await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Tools"}])))
            .mount(&server)
            .await;

        let response = router
            .oneshot(Request::get("/categories/9/edit").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_edit_when_list_fails_is_bad_gateway() {
        let (server, _state, router) = test_app().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let response = router
            .oneshot(Request::get("/products/4/edit").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_cart_remove_failure_shows_error() {
        let (server, _state, router) = test_app().await;
        Mock::given(method("DELETE"))
            .and(path("/api/cart/3"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "not in cart"})))
            .mount(&server)
            .await;

        let response = router
            .oneshot(form_post("/cart/3/delete", ""))
            .await
            .unwrap();

        let html = body_text(response).await;
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("not in cart"));
    }
}
