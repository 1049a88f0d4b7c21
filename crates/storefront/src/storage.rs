//! Cart persistence: a single JSON slot on disk.
//!
//! The cart is mirrored here after every mutation and read back exactly
//! once at startup. A missing or unreadable slot is not an error - it
//! just means an empty cart - so restoration never blocks startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use backyard_birds_core::Cart;
use thiserror::Error;

/// Errors writing the cart slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem write or rename failed.
    #[error("failed to write cart slot {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Cart could not be serialized.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The storage slot the cart is mirrored to.
#[derive(Debug, Clone)]
pub struct CartStorage {
    path: PathBuf,
}

impl CartStorage {
    /// A storage slot at the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the persisted cart.
    ///
    /// Runs once at startup, before the router is built. A missing slot
    /// yields an empty cart silently; an unparsable one yields an empty
    /// cart with a warning. Never fails.
    #[must_use]
    pub fn load(&self) -> Cart {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Cart::default(),
            Err(e) => {
                tracing::warn!("Failed to read cart slot {:?}: {e}", self.path);
                return Cart::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!(
                    "Cart slot {:?} is corrupt, starting with an empty cart: {e}",
                    self.path
                );
                Cart::default()
            }
        }
    }

    /// Mirror the full cart mapping to the slot.
    ///
    /// Writes a sibling temp file and renames it over the slot, so a
    /// crash mid-write never leaves a torn slot behind.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the filesystem write
    /// fails. Callers treat this as best-effort and log the error.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(cart)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &json).map_err(|source| StorageError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StorageError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use backyard_birds_core::{Price, Print, PrintId};
    use rust_decimal::Decimal;

    use super::*;

    fn sample_cart() -> Cart {
        let mut cart = Cart::default();
        let print = Print {
            id: PrintId::new(1),
            title: "Tui at Dawn".to_string(),
            price: Price::new(Decimal::new(1250, 2)),
            category: "native".to_string(),
            image_ref: "/static/images/prints/1.jpg".to_string(),
        };
        cart.add(print.clone());
        cart.add(print);
        cart
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path().join("cart.json"));

        let cart = sample_cart();
        storage.save(&cart).unwrap();

        assert_eq!(storage.load(), cart);
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path().join("missing.json"));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_corrupt_slot_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        fs::write(&path, b"{ not json").unwrap();

        let storage = CartStorage::new(path);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path().join("nested/data/cart.json"));

        storage.save(&sample_cart()).unwrap();
        assert!(!storage.load().is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let storage = CartStorage::new(dir.path().join("cart.json"));

        let mut cart = sample_cart();
        storage.save(&cart).unwrap();

        cart.remove(PrintId::new(1));
        storage.save(&cart).unwrap();

        assert!(storage.load().is_empty());
    }
}
