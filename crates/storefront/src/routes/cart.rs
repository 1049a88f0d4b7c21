//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation is a command dispatched through the store, which mirrors
//! the cart to the storage slot; handlers only build views of the result.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use backyard_birds_core::{Cart, CartLine, Command, PrintId};

use crate::filters;
use crate::state::AppState;

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: i32,
    pub title: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
    pub image_url: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.print.id.as_i32(),
            title: line.print.title.clone(),
            quantity: line.quantity,
            price: line.print.price.to_string(),
            line_total: format!("${:.2}", line.line_total()),
            image_url: line.print.image_ref.clone(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().map(CartLineView::from).collect(),
            total: format!("${:.2}", cart.total()),
            item_count: cart.item_count(),
        }
    }
}

// =============================================================================
// Forms
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub print_id: i32,
}

/// Quantity bump form data (increment/decrement).
#[derive(Debug, Deserialize)]
pub struct AdjustCartForm {
    pub print_id: i32,
}

/// Set-quantity form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub print_id: i32,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub print_id: i32,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
    pub cart_count: u32,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

fn cart_view(state: &AppState) -> CartView {
    state.read(|store| CartView::from(store.cart()))
}

/// Cart items fragment plus the `cart-updated` trigger for the badge.
fn items_response(state: &AppState) -> Response {
    let cart = cart_view(state);
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate { cart },
    )
        .into_response()
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> impl IntoResponse {
    let cart = cart_view(&state);
    let cart_count = cart.item_count;
    CartShowTemplate { cart, cart_count }
}

/// Add a print to the cart (HTMX).
///
/// Unknown print ids are no-ops; the response is the count badge either
/// way, with an HTMX trigger so other cart fragments refresh themselves.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<AddToCartForm>) -> Response {
    state.dispatch(Command::AddItem(PrintId::new(form.print_id)));

    let count = state.read(|store| store.cart().item_count());
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartCountTemplate { count },
    )
        .into_response()
}

/// Increase a line's quantity by one (HTMX).
#[instrument(skip(state))]
pub async fn increment(
    State(state): State<AppState>,
    Form(form): Form<AdjustCartForm>,
) -> Response {
    state.dispatch(Command::IncrementQuantity(PrintId::new(form.print_id)));
    items_response(&state)
}

/// Decrease a line's quantity by one, saturating at 0 (HTMX).
///
/// The line stays in the cart at quantity 0; removing it is an explicit,
/// separate action.
#[instrument(skip(state))]
pub async fn decrement(
    State(state): State<AppState>,
    Form(form): Form<AdjustCartForm>,
) -> Response {
    state.dispatch(Command::DecrementQuantity(PrintId::new(form.print_id)));
    items_response(&state)
}

/// Set a line's quantity directly (HTMX).
#[instrument(skip(state))]
pub async fn update(State(state): State<AppState>, Form(form): Form<UpdateCartForm>) -> Response {
    state.dispatch(Command::SetQuantity {
        id: PrintId::new(form.print_id),
        quantity: form.quantity,
    });
    items_response(&state)
}

/// Remove a line from the cart entirely (HTMX).
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Response {
    state.dispatch(Command::RemoveItem(PrintId::new(form.print_id)));
    items_response(&state)
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.read(|store| store.cart().item_count());
    CartCountTemplate { count }
}
