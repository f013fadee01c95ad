use serde::{Deserialize, Serialize};

/// Identifier of the synthetic category that lists every plant.
pub const ALL_CATEGORY_ID: &str = "all";

/// Display name of the synthetic "all" category.
pub const ALL_CATEGORY_NAME: &str = "All Trees";

/// A plant from the catalog after normalization.
///
/// Every field is populated. Records from the remote catalog that omit a
/// field get the defaults documented on each field, so downstream code never
/// has to deal with a partially-shaped plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    /// Catalog identifier. Records without one get a random token, which is
    /// not stable across reloads.
    pub id: String,
    /// Display name, `"Tree"` when the source has none.
    pub name: String,
    /// Image URL, possibly empty.
    pub image: String,
    /// Category label as the source spells it, `"Tree"` when absent.
    pub category: String,
    /// Unit price, `0.0` when absent or not numeric.
    pub price: f64,
    /// Long description, possibly empty.
    pub description: String,
}

/// A catalog category after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    /// The synthetic category that is always listed first.
    #[must_use]
    pub fn all() -> Self {
        Self {
            id: ALL_CATEGORY_ID.to_owned(),
            name: ALL_CATEGORY_NAME.to_owned(),
        }
    }

    /// Returns `true` for the synthetic "all" category.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY_ID
    }
}

/// One line of the shopping cart.
///
/// `qty` is at least 1 for every entry held by a cart; an entry whose
/// quantity would drop to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

impl CartEntry {
    /// Price × quantity for this line.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}
