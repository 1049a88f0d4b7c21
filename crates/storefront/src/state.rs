//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use backyard_birds_core::{Cart, Catalog, Command, Store};

use crate::config::StorefrontConfig;
use crate::content::ContentStore;
use crate::storage::CartStorage;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. It owns the one [`Store`]
/// for the process lifetime; handlers mutate it only by dispatching
/// commands through [`AppState::dispatch`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    content: ContentStore,
    storage: CartStorage,
    store: Mutex<Store>,
}

impl AppState {
    /// Create the application state from restored startup pieces.
    ///
    /// `cart` must already be restored from the storage slot - this is
    /// the second phase of the two-phase startup, after restoration.
    #[must_use]
    pub fn new(
        config: StorefrontConfig,
        catalog: Catalog,
        content: ContentStore,
        storage: CartStorage,
        cart: Cart,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                content,
                storage,
                store: Mutex::new(Store::restored(catalog, cart)),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the content store.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Apply a command to the store, mirroring the cart to the storage
    /// slot when the command changed it.
    ///
    /// The write happens inside the store lock, so a persisted snapshot
    /// always reflects the most recently applied mutation. Write failures
    /// are logged and swallowed - persistence is best-effort.
    pub fn dispatch(&self, command: Command) {
        let mut store = self.lock_store();
        let applied = store.apply(command);
        if applied.cart_changed
            && let Err(e) = self.inner.storage.save(store.cart())
        {
            sentry::capture_error(&e);
            tracing::error!("Failed to persist cart: {e}");
        }
    }

    /// Read from the store under its lock.
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        f(&self.lock_store())
    }

    fn lock_store(&self) -> MutexGuard<'_, Store> {
        // A poisoned lock means a handler panicked mid-command; the store
        // itself is still structurally valid, so keep serving.
        self.inner
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
