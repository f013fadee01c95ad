//! The cart reducer.
//!
//! A [`Cart`] maps plant ids to [`CartEntry`] lines. Quantities never drop
//! to zero inside the map: decreasing the last unit removes the line.

use std::collections::BTreeMap;

use greenearth_core::CartEntry;
use serde::Serialize;

/// Shopping cart keyed by plant id.
///
/// Serializes as a JSON object `{"<id>": {id, name, price, qty}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: BTreeMap<String, CartEntry>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from stored entries. Entries with a zero quantity are
    /// dropped and every entry's `id` is aligned with its key.
    #[must_use]
    pub fn from_entries(entries: BTreeMap<String, CartEntry>) -> Self {
        let entries = entries
            .into_iter()
            .filter(|(_, entry)| entry.qty > 0)
            .map(|(key, mut entry)| {
                entry.id.clone_from(&key);
                (key, entry)
            })
            .collect();
        Self { entries }
    }

    /// Adds one unit of `id`. The first add creates the line with the given
    /// name and price; later adds only bump the quantity.
    pub fn add(&mut self, id: &str, name: &str, price: f64) {
        let entry = self
            .entries
            .entry(id.to_owned())
            .or_insert_with(|| CartEntry {
                id: id.to_owned(),
                name: name.to_owned(),
                price,
                qty: 0,
            });
        entry.qty = entry.qty.saturating_add(1);
    }

    /// Adds one unit to an existing line. Returns `false` if `id` is not in
    /// the cart.
    pub fn increase(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.qty = entry.qty.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Removes one unit from an existing line, deleting the line when its
    /// quantity reaches zero. Returns `false` if `id` is not in the cart.
    pub fn decrease(&mut self, id: &str) -> bool {
        let Some(entry) = self.entries.get_mut(id) else {
            return false;
        };
        entry.qty = entry.qty.saturating_sub(1);
        if entry.qty == 0 {
            self.entries.remove(id);
        }
        true
    }

    /// Deletes the line for `id`. Returns `false` if it was not present.
    pub fn remove(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Sum of price × quantity over every line. Zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.values().map(CartEntry::amount).sum()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartEntry> {
        self.entries.get(id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
