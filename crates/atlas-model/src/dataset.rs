//! Dataset records handed to the map engine.
//!
//! A record is produced per successful remote fetch; the engine owns it
//! from then on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of a dataset inside the map engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DatasetInfo {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }
}

/// Inferred type of a tabular column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Integer,
    Real,
    Boolean,
    String,
}

/// Name and inferred type of one tabular column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub field_type: FieldType,
}

/// Parsed delimited-text payload: typed columns plus row-major cells.
///
/// Cells are JSON values coerced to the column's inferred type; empty
/// cells are null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub fields: Vec<FieldDescriptor>,
    pub rows: Vec<Vec<Value>>,
}

impl TableData {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.fields.len()
    }
}

/// A GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: Value,
    #[serde(default)]
    pub properties: Value,
}

/// A GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }
}

/// Parsed dataset payload, one variant per processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatasetData {
    Geospatial(FeatureCollection),
    Tabular(TableData),
}

/// A dataset ready to be merged into map state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub info: DatasetInfo,
    pub data: DatasetData,
}

/// A saved map configuration accompanying a dataset.
///
/// Only the version envelope is interpreted here; the body is opaque to
/// everything but the map engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfig {
    pub version: String,
    pub config: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn feature_collection_round_trips() {
        let raw = json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [-122.4, 37.7]},
                "properties": {"name": "sf"}
            }]
        });
        let collection: FeatureCollection = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(collection.feature_count(), 1);
        assert_eq!(serde_json::to_value(&collection).unwrap(), raw);
    }

    #[test]
    fn feature_without_properties_gets_null() {
        let raw = json!({"type": "Feature", "geometry": {"type": "Point", "coordinates": [0, 0]}});
        let feature: Feature = serde_json::from_value(raw).unwrap();
        assert!(feature.properties.is_null());
    }
}
