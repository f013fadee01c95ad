//! Cart persistence that never fails.
//!
//! [`CartStore`] writes the cart under [`CART_KEY`] and reads it back at
//! startup. Any store error or unreadable blob is logged and swallowed: a
//! broken store means the cart starts empty, never that the storefront stops.

use std::collections::BTreeMap;

use greenearth_core::CartEntry;

use crate::cart::Cart;
use crate::store::KeyValueStore;

/// Key under which the cart blob is stored.
pub const CART_KEY: &str = "ge_cart";

pub struct CartStore<S> {
    store: S,
}

impl<S: KeyValueStore> CartStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying key-value store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Writes `cart` to the store. Failures are logged and ignored.
    pub fn save(&self, cart: &Cart) {
        let blob = match serde_json::to_string(cart) {
            Ok(blob) => blob,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize cart, skipping save");
                return;
            }
        };
        if let Err(error) = self.store.set(CART_KEY, &blob) {
            tracing::warn!(%error, "failed to persist cart");
        }
    }

    /// Reads the persisted cart. Returns an empty cart when nothing is
    /// stored, the blob does not parse, or the store is unavailable.
    pub fn load(&self) -> Cart {
        let raw = match self.store.get(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(error) => {
                tracing::warn!(%error, "cart store unavailable, starting with an empty cart");
                return Cart::new();
            }
        };

        match serde_json::from_str::<BTreeMap<String, CartEntry>>(&raw) {
            Ok(entries) => Cart::from_entries(entries),
            Err(error) => {
                tracing::warn!(%error, "persisted cart is corrupt, starting with an empty cart");
                Cart::new()
            }
        }
    }
}
