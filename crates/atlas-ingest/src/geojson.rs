//! GeoJSON processing.

use atlas_model::{Feature, FeatureCollection};
use serde_json::Value;
use tracing::info;

use crate::error::{IngestError, Result};

/// Parses a GeoJSON response into a feature collection.
///
/// Accepts a `FeatureCollection` or a single `Feature` (wrapped into a
/// one-element collection). Any other JSON document is rejected with a
/// structured error.
pub fn parse_geojson(raw: &str) -> Result<FeatureCollection> {
    let value: Value = serde_json::from_str(raw)?;
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| IngestError::InvalidGeoJson {
            reason: "missing type field".to_string(),
        })?;

    let collection = match kind {
        "FeatureCollection" => serde_json::from_value::<FeatureCollection>(value)?,
        "Feature" => {
            let feature = serde_json::from_value::<Feature>(value)?;
            FeatureCollection {
                kind: "FeatureCollection".to_string(),
                features: vec![feature],
            }
        }
        other => {
            return Err(IngestError::InvalidGeoJson {
                reason: format!("unexpected type '{other}'"),
            });
        }
    };

    info!(
        features = collection.feature_count(),
        "parsed geojson dataset"
    );
    Ok(collection)
}
