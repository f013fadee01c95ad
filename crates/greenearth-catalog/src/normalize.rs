//! Total normalization of loosely-shaped catalog records.
//!
//! The remote catalog does not commit to field names, so every field of a
//! [`Plant`] or [`Category`] is resolved from an ordered list of candidate
//! keys. The first candidate that is present, not `null`, and coercible to
//! the field's type wins; when none match the field takes its default.
//! Nothing in this module can fail.

use greenearth_core::{Category, Plant};
use rand::Rng;
use serde_json::Value;

const PLANT_ID_KEYS: &[&str] = &["id", "plantId", "_id"];
const PLANT_NAME_KEYS: &[&str] = &["name", "plant_name", "title"];
const PLANT_IMAGE_KEYS: &[&str] = &["image", "img", "thumbnail"];
const PLANT_CATEGORY_KEYS: &[&str] = &["category", "category_name", "type"];
const PLANT_PRICE_KEYS: &[&str] = &["price", "cost"];
const PLANT_DESCRIPTION_KEYS: &[&str] = &["description", "short_description", "about"];

const CATEGORY_ID_KEYS: &[&str] = &["id", "category_id", "_id", "slug"];
const CATEGORY_NAME_KEYS: &[&str] = &["category", "category_name", "name", "title", "label", "slug"];

const DEFAULT_PLANT_NAME: &str = "Tree";
const DEFAULT_PLANT_CATEGORY: &str = "Tree";
const DEFAULT_CATEGORY_NAME: &str = "Category";

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 11;

/// A plant record with each field resolved independently and no defaults
/// applied yet.
///
/// `None` means no candidate key produced a usable value. The detail view
/// relies on this to tell "the server omitted the price" apart from "the
/// server said the price is 0".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantFields {
    pub id: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl PlantFields {
    /// Resolves every field of `record` against its candidate keys.
    #[must_use]
    pub fn extract(record: &Value) -> Self {
        Self {
            id: resolve(record, PLANT_ID_KEYS, coerce_text),
            name: resolve(record, PLANT_NAME_KEYS, coerce_text),
            image: resolve(record, PLANT_IMAGE_KEYS, coerce_text),
            category: resolve(record, PLANT_CATEGORY_KEYS, coerce_text),
            price: resolve(record, PLANT_PRICE_KEYS, coerce_number),
            description: resolve(record, PLANT_DESCRIPTION_KEYS, coerce_text),
        }
    }

    /// Applies defaults to every missing field.
    #[must_use]
    pub fn into_plant(self) -> Plant {
        Plant {
            id: self.id.unwrap_or_else(random_token),
            name: self
                .name
                .unwrap_or_else(|| DEFAULT_PLANT_NAME.to_owned()),
            image: self.image.unwrap_or_default(),
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_PLANT_CATEGORY.to_owned()),
            price: self.price.unwrap_or(0.0),
            description: self.description.unwrap_or_default(),
        }
    }
}

impl From<&Plant> for PlantFields {
    fn from(plant: &Plant) -> Self {
        Self {
            id: Some(plant.id.clone()),
            name: Some(plant.name.clone()),
            image: Some(plant.image.clone()),
            category: Some(plant.category.clone()),
            price: Some(plant.price),
            description: Some(plant.description.clone()),
        }
    }
}

/// Normalizes an arbitrary JSON value into a fully-populated [`Plant`].
#[must_use]
pub fn normalize_plant(record: &Value) -> Plant {
    PlantFields::extract(record).into_plant()
}

/// Normalizes an arbitrary JSON value into a [`Category`]. `index` is the
/// record's position in the source list and becomes the id when the record
/// carries none.
#[must_use]
pub fn normalize_category(record: &Value, index: usize) -> Category {
    Category {
        id: resolve(record, CATEGORY_ID_KEYS, coerce_text).unwrap_or_else(|| index.to_string()),
        name: resolve(record, CATEGORY_NAME_KEYS, coerce_text)
            .unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_owned()),
    }
}

/// Prepends the synthetic "All Trees" category. Source entries that reuse
/// the synthetic id are dropped so "all" appears exactly once.
#[must_use]
pub fn with_all_category(categories: Vec<Category>) -> Vec<Category> {
    let mut list = Vec::with_capacity(categories.len() + 1);
    list.push(Category::all());
    list.extend(categories.into_iter().filter(|c| !c.is_all()));
    list
}

fn resolve<T>(record: &Value, keys: &[&str], coerce: fn(&Value) -> Option<T>) -> Option<T> {
    keys.iter()
        .filter_map(|key| record.get(key))
        .filter(|value| !value.is_null())
        .find_map(coerce)
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };
    number.filter(|n| n.is_finite())
}

/// Random lowercase base-36 token for records without an identifier.
fn random_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| char::from(TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
