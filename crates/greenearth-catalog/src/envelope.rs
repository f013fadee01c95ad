//! Response envelope extraction.
//!
//! The catalog API is not consistent about where it puts the payload: the
//! plant list arrives under `plants` on one endpoint and under `data` on
//! another. Each [`Endpoint`] carries an ordered list of envelope keys; the
//! first key present with a non-null value wins.

use serde_json::Value;

use crate::error::CatalogError;

/// The four catalog reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AllPlants,
    Categories,
    PlantsByCategory,
    PlantById,
}

impl Endpoint {
    /// Envelope keys to try, in order.
    #[must_use]
    pub fn envelope_keys(self) -> &'static [&'static str] {
        match self {
            Endpoint::AllPlants => &["plants", "data"],
            Endpoint::Categories => &["categories", "data"],
            Endpoint::PlantsByCategory => &["data", "plants"],
            Endpoint::PlantById => &["plant", "data"],
        }
    }

    /// Human-readable name used in logs and error context.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::AllPlants => "all plants",
            Endpoint::Categories => "categories",
            Endpoint::PlantsByCategory => "plants by category",
            Endpoint::PlantById => "plant by id",
        }
    }
}

/// Returns the first non-null envelope value for `endpoint`, if any.
pub(crate) fn extract_record(body: &Value, endpoint: Endpoint) -> Option<&Value> {
    endpoint
        .envelope_keys()
        .iter()
        .filter_map(|key| body.get(key))
        .find(|value| !value.is_null())
}

/// Returns the list held by the envelope for `endpoint`.
///
/// A body with none of the envelope keys yields an empty list. A key that
/// is present but holds something other than an array is an error.
pub(crate) fn extract_list(body: &Value, endpoint: Endpoint) -> Result<&[Value], CatalogError> {
    match extract_record(body, endpoint) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(CatalogError::Envelope {
            context: endpoint.name().to_owned(),
            found: json_kind(other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn all_plants_reads_plants_key() {
        let body = json!({"plants": [{"id": 1}, {"id": 2}]});
        assert_eq!(extract_list(&body, Endpoint::AllPlants).unwrap().len(), 2);
    }

    #[test]
    fn all_plants_falls_back_to_data_key() {
        let body = json!({"data": [{"id": 1}]});
        assert_eq!(extract_list(&body, Endpoint::AllPlants).unwrap().len(), 1);
    }

    #[test]
    fn plants_by_category_prefers_data_over_plants() {
        let body = json!({"data": [{"id": 1}], "plants": [{"id": 2}, {"id": 3}]});
        let items = extract_list(&body, Endpoint::PlantsByCategory).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], 1);
    }

    #[test]
    fn categories_read_categories_then_data() {
        let body = json!({"categories": [{"id": 1}]});
        assert_eq!(extract_list(&body, Endpoint::Categories).unwrap().len(), 1);
        let body = json!({"data": [{"id": 1}, {"id": 2}]});
        assert_eq!(extract_list(&body, Endpoint::Categories).unwrap().len(), 2);
    }

    #[test]
    fn null_envelope_key_is_skipped() {
        let body = json!({"plants": null, "data": [{"id": 1}]});
        assert_eq!(extract_list(&body, Endpoint::AllPlants).unwrap().len(), 1);
    }

    #[test]
    fn missing_envelope_is_empty_list() {
        let body = json!({"status": true});
        assert!(extract_list(&body, Endpoint::AllPlants).unwrap().is_empty());
    }

    #[test]
    fn non_list_envelope_is_an_error() {
        let body = json!({"plants": {"id": 1}});
        let err = extract_list(&body, Endpoint::AllPlants).unwrap_err();
        assert!(
            matches!(err, CatalogError::Envelope { found: "object", .. }),
            "expected Envelope error, got: {err:?}"
        );
    }

    #[test]
    fn plant_by_id_record_uses_plant_then_data() {
        let body = json!({"plant": {"name": "Neem"}});
        assert_eq!(
            extract_record(&body, Endpoint::PlantById).unwrap()["name"],
            "Neem"
        );
        let body = json!({"data": {"name": "Guava Tree"}});
        assert_eq!(
            extract_record(&body, Endpoint::PlantById).unwrap()["name"],
            "Guava Tree"
        );
        assert!(extract_record(&json!({}), Endpoint::PlantById).is_none());
    }
}
