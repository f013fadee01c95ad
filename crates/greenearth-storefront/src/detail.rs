//! Two-phase detail fill.
//!
//! The card that opened the detail view already carries the full normalized
//! plant, so the view is filled from it immediately (the provisional value).
//! A later fetch may confirm richer data; confirmed fields replace
//! provisional ones only when they are non-empty, so a sparse response can
//! never blank out something already shown.

use greenearth_catalog::PlantFields;
use greenearth_core::Plant;

const DEFAULT_NAME: &str = "Tree";
const DEFAULT_CATEGORY: &str = "Tree";

/// Everything the detail overlay shows about one plant.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantDetail {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
    pub category: String,
    pub price: f64,
}

impl PlantDetail {
    /// Detail taken straight from a card's plant.
    #[must_use]
    pub fn provisional(plant: &Plant) -> Self {
        Self {
            id: plant.id.clone(),
            name: non_empty(plant.name.trim()).unwrap_or(DEFAULT_NAME).to_owned(),
            image: plant.image.clone(),
            description: plant.description.clone(),
            category: non_empty(&plant.category)
                .unwrap_or(DEFAULT_CATEGORY)
                .to_owned(),
            price: if plant.price.is_finite() { plant.price } else { 0.0 },
        }
    }
}

/// A provisional detail plus an optional confirmed upgrade.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailFill {
    pub provisional: PlantDetail,
    pub confirmed: Option<PlantFields>,
}

impl DetailFill {
    #[must_use]
    pub fn new(provisional: PlantDetail) -> Self {
        Self {
            provisional,
            confirmed: None,
        }
    }

    pub fn confirm(&mut self, fields: PlantFields) {
        self.confirmed = Some(fields);
    }

    /// Merges the confirmed fields over the provisional detail. Strings win
    /// when non-empty, the price wins when finite. The id never changes.
    #[must_use]
    pub fn resolve(&self) -> PlantDetail {
        let base = &self.provisional;
        let Some(confirmed) = &self.confirmed else {
            return base.clone();
        };

        let pick = |new: &Option<String>, old: &str| -> String {
            new.as_deref()
                .and_then(non_empty)
                .unwrap_or(old)
                .to_owned()
        };

        PlantDetail {
            id: base.id.clone(),
            name: pick(&confirmed.name, &base.name),
            image: pick(&confirmed.image, &base.image),
            description: pick(&confirmed.description, &base.description),
            category: pick(&confirmed.category, &base.category),
            price: confirmed
                .price
                .filter(|p| p.is_finite())
                .unwrap_or(base.price),
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
