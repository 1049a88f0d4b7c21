//! The store: one owned object holding catalog, cart, and view state,
//! mutated only through [`Command`] values applied by a single reducer.
//!
//! Handlers never touch the cart directly; they build a command and hand
//! it to [`Store::apply`], which reports whether the cart changed so the
//! caller knows to mirror it to the storage slot.

use crate::cart::Cart;
use crate::catalog::{Catalog, Print};
use crate::types::PrintId;
use crate::view::{CategoryFilter, SortKey, ViewState, list_visible};

/// The closed set of user intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add one copy of a catalog print to the cart.
    AddItem(PrintId),
    /// Increase a cart line's quantity by one.
    IncrementQuantity(PrintId),
    /// Decrease a cart line's quantity by one, saturating at 0.
    DecrementQuantity(PrintId),
    /// Set a cart line's quantity directly.
    SetQuantity { id: PrintId, quantity: u32 },
    /// Delete a cart line entirely.
    RemoveItem(PrintId),
    /// Change the grid sort order.
    ChangeSort(SortKey),
    /// Change the grid category filter.
    ChangeFilter(CategoryFilter),
    /// Open the quick-view overlay on an index into the visible list.
    SelectItem(usize),
    /// Close the quick-view overlay.
    ClearSelection,
}

/// What applying a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    /// Whether the cart mapping changed (and therefore must be persisted).
    pub cart_changed: bool,
}

impl Applied {
    const CART: Self = Self { cart_changed: true };
    const VIEW_ONLY: Self = Self { cart_changed: false };
    const NOOP: Self = Self { cart_changed: false };
}

/// Catalog, cart, and view state behind a single reducer.
#[derive(Debug, Clone)]
pub struct Store {
    catalog: Catalog,
    cart: Cart,
    view: ViewState,
}

impl Store {
    /// A store with an empty cart and default view state.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::restored(catalog, Cart::default())
    }

    /// A store initialized from a cart restored out of the storage slot.
    #[must_use]
    pub const fn restored(catalog: Catalog, cart: Cart) -> Self {
        Self {
            catalog,
            cart,
            view: ViewState {
                sort: SortKey::TitleAsc,
                filter: CategoryFilter::All,
                selected: None,
            },
        }
    }

    /// Apply one command. Commands addressing unknown prints or cart
    /// lines are no-ops; nothing here can fail.
    pub fn apply(&mut self, command: Command) -> Applied {
        match command {
            Command::AddItem(id) => match self.catalog.get(id) {
                Some(print) => {
                    self.cart.add(print.clone());
                    Applied::CART
                }
                None => Applied::NOOP,
            },
            Command::IncrementQuantity(id) => self.cart_applied(Cart::increment, id),
            Command::DecrementQuantity(id) => self.cart_applied(Cart::decrement, id),
            Command::SetQuantity { id, quantity } => {
                if self.cart.set_quantity(id, quantity) {
                    Applied::CART
                } else {
                    Applied::NOOP
                }
            }
            Command::RemoveItem(id) => self.cart_applied(Cart::remove, id),
            // Sort and filter changes close the overlay: the selection
            // indexes the visible list, which is about to reorder.
            Command::ChangeSort(sort) => {
                self.view.sort = sort;
                self.view.selected = None;
                Applied::VIEW_ONLY
            }
            Command::ChangeFilter(filter) => {
                self.view.filter = filter;
                self.view.selected = None;
                Applied::VIEW_ONLY
            }
            Command::SelectItem(index) => {
                self.view.selected = Some(index);
                Applied::VIEW_ONLY
            }
            Command::ClearSelection => {
                self.view.selected = None;
                Applied::VIEW_ONLY
            }
        }
    }

    fn cart_applied(&mut self, op: fn(&mut Cart, PrintId) -> bool, id: PrintId) -> Applied {
        if op(&mut self.cart, id) {
            Applied::CART
        } else {
            Applied::NOOP
        }
    }

    /// The catalog filtered and sorted per the current view state.
    #[must_use]
    pub fn visible(&self) -> Vec<&Print> {
        list_visible(self.catalog.prints(), &self.view.filter, self.view.sort)
    }

    /// The print shown in the quick-view overlay, if one is open and the
    /// selection still lands inside the visible list.
    #[must_use]
    pub fn selected(&self) -> Option<&Print> {
        self.view
            .selected
            .and_then(|index| self.visible().get(index).copied())
    }

    /// The read-only catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The cart mapping.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The current view state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }
}
