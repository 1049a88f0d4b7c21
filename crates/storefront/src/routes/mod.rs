//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Print grid (sort/filter via query params)
//! GET  /health                  - Health check
//!
//! # Prints
//! GET  /prints/{id}             - Print detail page
//! GET  /prints/{id}/quick-view  - Quick-view overlay fragment (HTMX)
//! GET  /prints/close            - Close the overlay (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart                    - Cart page
//! POST /cart/add                - Add a print (returns count badge, triggers cart-updated)
//! POST /cart/increment          - Bump a line's quantity (returns cart_items fragment)
//! POST /cart/decrement          - Drop a line's quantity, floor 0 (returns cart_items fragment)
//! POST /cart/update             - Set a line's quantity (returns cart_items fragment)
//! POST /cart/remove             - Remove a line (returns cart_items fragment)
//! GET  /cart/count              - Cart count badge (fragment)
//!
//! # Pages
//! GET  /about                   - About page (markdown content)
//! ```

pub mod cart;
pub mod pages;
pub mod prints;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the print routes router.
pub fn print_routes() -> Router<AppState> {
    Router::new()
        .route("/close", get(prints::close))
        .route("/{id}", get(prints::show))
        .route("/{id}/quick-view", get(prints::quick_view))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // The grid is the home page
        .route("/", get(prints::index))
        // Print routes
        .nest("/prints", print_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Static content pages
        .route("/about", get(pages::about))
}
