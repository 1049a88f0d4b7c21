//! Print grid and quick-view route handlers.
//!
//! The grid is the home page. Sort and filter arrive as query parameters
//! and are translated into `ChangeSort`/`ChangeFilter` commands before
//! rendering; the quick-view overlay is driven by `SelectItem`/
//! `ClearSelection` and swapped in and out as an HTMX fragment.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use tracing::instrument;

use backyard_birds_core::{CategoryFilter, Command, Print, PrintId, SortKey};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Print display data for templates.
#[derive(Clone)]
pub struct PrintView {
    pub id: i32,
    pub title: String,
    pub price: String,
    pub category: String,
    pub image_url: String,
}

impl From<&Print> for PrintView {
    fn from(print: &Print) -> Self {
        Self {
            id: print.id.as_i32(),
            title: print.title.clone(),
            price: print.price.to_string(),
            category: print.category.clone(),
            image_url: print.image_ref.clone(),
        }
    }
}

/// Grid query parameters.
#[derive(Debug, Deserialize)]
pub struct GridQuery {
    pub sort: Option<SortKey>,
    pub category: Option<String>,
}

/// Print grid page template.
#[derive(Template, WebTemplate)]
#[template(path = "prints/index.html")]
pub struct PrintsIndexTemplate {
    pub prints: Vec<PrintView>,
    pub categories: Vec<String>,
    pub sort: &'static str,
    pub filter: String,
    pub cart_count: u32,
}

/// Print detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "prints/show.html")]
pub struct PrintShowTemplate {
    pub print: PrintView,
    pub cart_count: u32,
    /// Absolute origin for Open Graph tags.
    pub base_url: String,
}

/// Quick-view overlay fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/quick_view.html")]
pub struct QuickViewTemplate {
    pub print: PrintView,
}

/// Display the print grid.
///
/// `sort` and `category` query parameters become view-state commands, so
/// the store remembers the last grid settings across navigation.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<GridQuery>,
) -> impl IntoResponse {
    if let Some(sort) = query.sort {
        state.dispatch(Command::ChangeSort(sort));
    }
    if let Some(category) = &query.category {
        state.dispatch(Command::ChangeFilter(CategoryFilter::from_param(category)));
    }

    state.read(|store| PrintsIndexTemplate {
        prints: store.visible().into_iter().map(PrintView::from).collect(),
        categories: store
            .catalog()
            .categories()
            .into_iter()
            .map(String::from)
            .collect(),
        sort: store.view().sort.as_str(),
        filter: store.view().filter.as_str().to_string(),
        cart_count: store.cart().item_count(),
    })
}

/// Display a print detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<PrintShowTemplate> {
    let base_url = state.config().base_url.clone();
    state.read(|store| {
        store
            .catalog()
            .get(PrintId::new(id))
            .map(|print| PrintShowTemplate {
                print: PrintView::from(print),
                cart_count: store.cart().item_count(),
                base_url: base_url.clone(),
            })
            .ok_or_else(|| AppError::NotFound(format!("print {id}")))
    })
}

/// Open the quick-view overlay for a print (HTMX).
///
/// Selects the print's index in the currently visible list, then renders
/// the overlay fragment from the selection.
#[instrument(skip(state))]
pub async fn quick_view(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<QuickViewTemplate> {
    let index = state.read(|store| {
        store
            .visible()
            .iter()
            .position(|print| print.id == PrintId::new(id))
    });

    let Some(index) = index else {
        return Err(AppError::NotFound(format!("print {id}")));
    };
    state.dispatch(Command::SelectItem(index));

    state.read(|store| {
        store
            .selected()
            .map(|print| QuickViewTemplate {
                print: PrintView::from(print),
            })
            // Only reachable if another request changed the view between
            // the dispatch above and this read.
            .ok_or_else(|| AppError::Internal(format!("selection lost for print {id}")))
    })
}

/// Close the quick-view overlay (HTMX).
///
/// Bound both to the overlay's close button and to the Escape key while
/// the overlay is open; the empty fragment clears the overlay target.
#[instrument(skip(state))]
pub async fn close(State(state): State<AppState>) -> impl IntoResponse {
    state.dispatch(Command::ClearSelection);
    Html("")
}
