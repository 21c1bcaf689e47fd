//! Sample-map catalog entries.
//!
//! The shell fetches the catalog as a remote JSON document; entries keep
//! the camelCase field names of that document.

use serde::{Deserialize, Serialize};

/// One entry of the curated sample-map catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleMapDescriptor {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Catalog section this entry belongs to ("sample" for the demo set).
    pub query_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub data_url: String,
    /// Companion saved-configuration document, when the sample ships one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_url: Option<String>,
    /// Approximate payload size in bytes, for the picker UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_catalog_entry() {
        let raw = r#"{
            "id": "earthquakes",
            "label": "Earthquakes",
            "queryType": "sample",
            "imageUrl": "https://atlas-demo-data.example.com/earthquakes.png",
            "dataUrl": "https://atlas-demo-data.example.com/earthquakes.csv",
            "configUrl": "https://atlas-demo-data.example.com/earthquakes-config.json",
            "size": 24804
        }"#;
        let entry: SampleMapDescriptor = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.id, "earthquakes");
        assert_eq!(entry.query_type, "sample");
        assert!(entry.data_url.ends_with(".csv"));
        assert_eq!(entry.size, Some(24804));
    }

    #[test]
    fn optional_fields_default_to_none() {
        let raw = r#"{"id": "x", "label": "X", "queryType": "sample", "dataUrl": "u"}"#;
        let entry: SampleMapDescriptor = serde_json::from_str(raw).unwrap();
        assert!(entry.image_url.is_none());
        assert!(entry.config_url.is_none());
        assert!(entry.size.is_none());
    }
}
