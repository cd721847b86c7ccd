//! HTTP route handlers for the admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                         - Redirect to /users
//! GET  /health                   - Health check
//!
//! # Users
//! GET  /users                    - User list and creation form
//! POST /users                    - Create one user
//! POST /users/upload             - Create one user, or import a CSV file (multipart)
//!
//! # Categories
//! GET  /categories               - Category list and form
//! POST /categories               - Create or update (hidden `id`)
//! GET  /categories/{id}/edit     - Load a category into the form
//! POST /categories/{id}/delete   - Delete a category
//!
//! # Products
//! GET  /products                 - Product list and form
//! POST /products                 - Create or update (hidden `id`)
//! GET  /products/{id}/edit       - Load a product into the form
//! POST /products/{id}/delete     - Delete a product
//! POST /products/{id}/cart       - Add a product to the cart
//!
//! # Cart
//! GET  /cart                     - Cart lines
//! POST /cart/{id}/delete         - Remove a cart line
//! ```
//!
//! Mutating routes render the page straight from the container state, with
//! the outcome shown as a modal notice. Unknown paths redirect to `/users`.

pub mod cart;
pub mod categories;
pub mod products;
pub mod users;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index).post(users::create))
        .route("/upload", post(users::upload))
}

/// Create the category routes router.
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::index).post(categories::submit))
        .route("/{id}/edit", get(categories::edit))
        .route("/{id}/delete", post(categories::delete))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::submit))
        .route("/{id}/edit", get(products::edit))
        .route("/{id}/delete", post(products::delete))
        .route("/{id}/cart", post(products::add_to_cart))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::index))
        .route("/{id}/delete", post(cart::remove))
}

/// Build all page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .nest("/users", user_routes())
        .nest("/categories", category_routes())
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .fallback(home)
}

/// Landing page and catch-all.
async fn home() -> Redirect {
    Redirect::to("/users")
}
